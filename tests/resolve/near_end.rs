use plugin_order::{ NoMetadata, Placement, PluginId, Resolver, ResolverConfig, RuleSource };

#[test]
fn near_end_plugin_loads_after_unconstrained_plugins() {

    let snapshot = snapshot![ "z.esp", "a.esp", "b.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "[NearEnd]\nz.esp\n" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_no_warnings!( messages );
    assert_eq!( resolution.order(), ids![ "a.esp", "b.esp", "z.esp" ]);

}

#[test]
fn near_start_plugin_loads_before_unconstrained_plugins() {

    let snapshot = snapshot![ "a.esp", "b.esp", "s.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "[NearStart]\ns.esp\n" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, _ ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_eq!( resolution.order(), ids![ "s.esp", "a.esp", "b.esp" ]);

}

#[test]
fn near_end_tag_conflicts_resolve_to_first_source() {

    let snapshot = snapshot![ "a.esp", "m.esp", "b.esp" ];
    let sources = [
        RuleSource::optional( "mlox_my_rules.txt", "[NearStart]\nm.esp\n" ),
        RuleSource::mandatory( "mlox_base.txt", "[NearEnd]\nm.esp\n" ),
    ];

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &sources ).unwrap();

    assert_eq!( resolution.order(), ids![ "m.esp", "a.esp", "b.esp" ]);
    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].text, "m.esp is already tagged near start, ignoring near end tag" );

}

#[test]
fn near_tag_conflicts_within_a_source_resolve_to_the_earlier_section() {

    let snapshot = snapshot![ "a.esp", "m.esp", "b.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "[NearEnd]\nm.esp\n\n[NearStart]\nm.esp\n" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_eq!( resolution.graph().placement( &PluginId::new( "m.esp" )), Some( Placement::NearEnd ));
    assert_eq!( resolution.order(), ids![ "a.esp", "b.esp", "m.esp" ]);
    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].text, "m.esp is already tagged near end, ignoring near start tag" );

}

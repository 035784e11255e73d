use plugin_order::{ NoMetadata, Resolver, ResolverConfig, RuleSource };

#[test]
fn masters_first_unless_a_rule_says_otherwise() {

    let snapshot = snapshot![ "plugin.esp", "master.esm", "early.esp", "late.esm" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "[Order]\nearly.esp\nlate.esm\n" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_no_warnings!( messages );
    assert_eq!( resolution.order(), ids![ "master.esm", "early.esp", "late.esm", "plugin.esp" ]);

}

#[test]
fn masters_first_can_be_disabled() {

    let snapshot = snapshot![ "plugin.esp", "master.esm" ];
    let config = ResolverConfig { masters_first: false, ..ResolverConfig::default() };
    let base = RuleSource::mandatory( "mlox_base.txt", "" );

    let resolver = Resolver::new( config, NoMetadata );
    let ( resolution, _ ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_eq!( resolution.order(), ids![ "plugin.esp", "master.esm" ]);

}

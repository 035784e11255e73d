use plugin_order::{ Hint, NoMetadata, PluginId, Resolver, ResolverConfig, RuleSource, Severity };

#[test]
fn source_precedence_earlier_source_wins_cycles() {

    let snapshot = snapshot![ "a.esp", "b.esp" ];
    let sources = [
        RuleSource::optional( "mlox_my_rules.txt", "[Order]\nb.esp\na.esp\n" ),
        RuleSource::mandatory( "mlox_base.txt", "[Order]\na.esp\nb.esp\n" ),
    ];

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &sources ).unwrap();

    assert_eq!( resolution.order(), ids![ "b.esp", "a.esp" ]);
    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].severity, Severity::Warning );
    assert_eq!( messages[0].text, "Cycle detected, not adding: a.esp -> b.esp (mlox_base.txt:3 [Order])" );

}

#[test]
fn source_precedence_later_hints_overwrite_earlier() {

    let snapshot = snapshot![ "a.esp", "b.esp" ];
    let sources = [
        RuleSource::optional( "mlox_user.txt", "[Conflict]\na.esp\nb.esp\n" ),
        RuleSource::mandatory( "mlox_base.txt", "[Requires]\na.esp\nmissing.esp\n" ),
    ];

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &sources ).unwrap();

    assert_eq!( messages.iter().filter(| message | message.severity == Severity::Warning ).count(), 2 );
    assert_eq!( resolution.hints().get( &PluginId::new( "a.esp" )), Some( &Hint::Requires ));
    assert_eq!( resolution.hints().get( &PluginId::new( "b.esp" )), Some( &Hint::Conflict ));

}

#[test]
fn source_precedence_optional_source_errors_are_not_fatal() {

    let snapshot = snapshot![ "a.esp", "b.esp" ];
    let sources = [
        RuleSource::optional( "mlox_user.txt", "[Order]\nb.esp\n[Nonsense]\n" ),
        RuleSource::mandatory( "mlox_base.txt", "" ),
    ];

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &sources ).unwrap();

    assert_eq!( resolution.order(), ids![ "a.esp", "b.esp" ]);
    assert_eq!( messages[0].severity, Severity::Error );
    assert_eq!( plugin_order::exit_status( &messages ), 1 );

}

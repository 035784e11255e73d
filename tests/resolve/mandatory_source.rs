use plugin_order::{ NoMetadata, ResolveError, Resolver, ResolverConfig, RuleSource };

#[test]
fn mandatory_source_parse_error_aborts() {

    let snapshot = snapshot![ "a.esp" ];
    let sources = [
        RuleSource::optional( "mlox_user.txt", "[Note]\na.esp\n" ),
        RuleSource::mandatory( "mlox_base.txt", "[Order]\n[ANY a.esp\n" ),
    ];

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    match resolver.resolve( &snapshot, &sources ) {
        Err(( ResolveError::MandatorySourceFailed { name }, messages )) => {
            assert_eq!( name, "mlox_base.txt" );
            // messages gathered before the failure are kept
            assert_eq!( messages.len(), 2 );
        },
        Err(( err, _ )) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    }

}

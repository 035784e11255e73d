use plugin_order::{ LoadOrder, NoMetadata, ResolveError, Resolver, ResolverConfig, RuleSource };

#[test]
fn no_plugins_is_fatal() {

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let sources = [ RuleSource::mandatory( "mlox_base.txt", "[Order]\na.esp\nb.esp\n" )];

    match resolver.resolve( &LoadOrder::default(), &sources ) {
        Err(( ResolveError::NoPlugins, messages )) => assert!( messages.is_empty() ),
        Err(( err, _ )) => panic!( "Unexpected error: {}", err ),
        Ok( _ ) => panic!( "Expected failure" ),
    }

}

use plugin_order::{ NoMetadata, Resolver, ResolverConfig, RuleSource };

#[test]
fn annotated_marks_moved_plugins_and_hints() {

    let snapshot = snapshot![ "a.esp", "b.esp", "c.esp", "d.esp", "e.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "\
[Order]
d.esp
b.esp

[Conflict]
c.esp
e.esp
" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, _ ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_eq!( resolution.order(), ids![ "a.esp", "d.esp", "b.esp", "c.esp", "e.esp" ]);

    let lines = resolution.annotated().iter().map( ToString::to_string ).collect::<Vec<_>>();
    assert_eq!( lines, vec![
        "_001_ a.esp",
        "*004* d.esp",
        "_002_ b.esp",
        "*!003*! c.esp",
        "*!005*! e.esp",
    ]);

}

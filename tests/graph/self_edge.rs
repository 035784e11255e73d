use plugin_order::{ OrderGraph, PluginId };

#[test]
fn graph_rejects_self_edge() {

    let a = PluginId::new( "a.esp" );
    let mut graph = OrderGraph::new();

    assert!( !graph.add_edge( "", a.clone(), PluginId::new( "A.ESP" )));
    assert!( graph.edges().is_empty() );
    assert!( graph.contains( &a ));
    assert_eq!( graph.linearize( &[]), vec![ a ]);

}

use plugin_order::{ OrderGraph, PluginId, Placement, Severity };

#[test]
fn placement_first_tag_wins() {

    let id = PluginId::new( "mod.esp" );
    let mut graph = OrderGraph::new();

    assert!( graph.tag_near_start( id.clone() ));
    assert!( graph.tag_near_start( id.clone() ));
    assert_no_warnings!( graph.messages() );

    assert!( !graph.tag_near_end( id.clone() ));
    assert_eq!( graph.placement( &id ), Some( Placement::NearStart ));

    let messages = graph.take_messages();
    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].severity, Severity::Warning );
    assert_eq!( messages[0].text, "mod.esp is already tagged near start, ignoring near end tag" );
    assert!( graph.messages().is_empty() );

}

use plugin_order::{ OrderGraph, Placement };

#[test]
fn linearize_drains_near_start_then_untagged_then_near_end() {

    let order = ids![ "end.esp", "plain.esp", "start.esp", "other.esp" ];
    let mut graph = OrderGraph::new();
    order.iter().for_each(| id | graph.add_node( id.clone() ));

    assert!( graph.tag_near_end( order[0].clone() ));
    assert!( graph.tag_near_start( order[2].clone() ));
    assert_eq!( graph.placement( &order[2] ), Some( Placement::NearStart ));

    assert_eq!( graph.linearize( &order ), ids![ "start.esp", "plain.esp", "other.esp", "end.esp" ]);

}

#[test]
fn linearize_buckets_never_override_edges() {

    let [ start, late ]: [_; 2] = ids![ "start.esp", "late.esp" ].try_into().unwrap();
    let mut graph = OrderGraph::new();

    graph.tag_near_end( late.clone() );
    graph.tag_near_start( start.clone() );
    assert!( graph.add_edge( "rule", late.clone(), start.clone() ));

    assert_eq!( graph.linearize( &[ start.clone(), late.clone() ]), vec![ late, start ]);

}

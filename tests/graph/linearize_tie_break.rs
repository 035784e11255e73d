use plugin_order::OrderGraph ;

#[test]
fn linearize_follows_tie_break_among_unconstrained() {

    let mut graph = OrderGraph::new();
    ids![ "x.esp", "y.esp", "z.esp" ].into_iter().for_each(| id | graph.add_node( id ));

    assert_eq!(
        graph.linearize( &ids![ "z.esp", "x.esp", "y.esp" ]),
        ids![ "z.esp", "x.esp", "y.esp" ],
    );

}

#[test]
fn linearize_puts_unranked_nodes_after_ranked_in_insertion_order() {

    let mut graph = OrderGraph::new();
    ids![ "late1.esp", "ranked.esp", "late2.esp" ].into_iter().for_each(| id | graph.add_node( id ));

    assert_eq!(
        graph.linearize( &ids![ "ranked.esp" ]),
        ids![ "ranked.esp", "late1.esp", "late2.esp" ],
    );

}

#[test]
fn linearize_respects_edges_over_tie_break() {

    let [ a, b, c ]: [_; 3] = ids![ "a.esp", "b.esp", "c.esp" ].try_into().unwrap();
    let mut graph = OrderGraph::new();
    graph.add_edge( "", c.clone(), a.clone() );
    graph.add_node( b.clone() );

    assert_eq!( graph.linearize( &[ a.clone(), b.clone(), c.clone() ]), vec![ b, c, a ]);

}

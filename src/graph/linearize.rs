use std::collections::{ BTreeSet, HashMap };
use petgraph::Direction::{ Incoming, Outgoing };
use petgraph::stable_graph::NodeIndex ;

use crate::PluginId ;
use super::{ OrderGraph, Placement };



/// Ready nodes are kept in three buckets, drained in this order.
const NEAR_START: usize = 0 ;
const UNTAGGED: usize = 1 ;
const NEAR_END: usize = 2 ;

impl OrderGraph {

    /// Produces a total order of every registered node consistent with every accepted edge.
    ///
    /// Source-elimination topological sort: among the nodes whose predecessors
    /// have all been emitted, near-start tagged nodes go first, untagged nodes
    /// next and near-end tagged nodes last. Within a bucket the node appearing
    /// earliest in `tie_break` wins; nodes absent from `tie_break` come after
    /// those present, in node insertion order.
    ///
    /// The result is a permutation of [`nodes`]( Self::nodes ).
    pub fn linearize( &self, tie_break: &[PluginId] ) -> Vec<PluginId> {

        let mut rank = HashMap::with_capacity( tie_break.len() );
        tie_break.iter().enumerate().for_each(|( position, id )| { rank.entry( id ).or_insert( position ); });

        // (in tie-break, position, node); tie-break members sort before the rest
        let key = | node: NodeIndex | match rank.get( &self.graph[node] ) {
            Some( &position ) => ( false, position, node ),
            None => ( true, node.index(), node ),
        };
        let bucket = | node: NodeIndex | match self.placements.get( &self.graph[node] ) {
            Some( Placement::NearStart ) => NEAR_START,
            None => UNTAGGED,
            Some( Placement::NearEnd ) => NEAR_END,
        };

        let mut in_degree = self.graph.node_indices()
            .map(| node | ( node, self.graph.neighbors_directed( node, Incoming ).count() ))
            .collect::<HashMap<_, _>>();
        let mut ready: [BTreeSet<( bool, usize, NodeIndex )>; 3] = Default::default();
        in_degree.iter()
            .filter(|( _, &degree )| degree == 0 )
            .for_each(|( &node, _ )| { ready[bucket( node )].insert( key( node )); });

        let mut order = Vec::with_capacity( self.graph.node_count() );
        while let Some(( _, _, node )) = ready.iter_mut().find_map( BTreeSet::pop_first ) {
            order.push( self.graph[node].clone() );
            for next in self.graph.neighbors_directed( node, Outgoing ) {
                let degree = in_degree.entry( next ).or_default();
                *degree -= 1 ;
                if *degree == 0 { ready[bucket( next )].insert( key( next )); }
            }
        }

        debug_assert_eq!( order.len(), self.graph.node_count(), "ordering graph contains a cycle" );
        order

    }

}

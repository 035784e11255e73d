use std::fmt::Write ;
use itertools::Itertools ;
use petgraph::Direction::{ Incoming, Outgoing };
use petgraph::visit::EdgeRef ;

use crate::PluginId ;
use super::OrderGraph ;



impl OrderGraph {

    /// Explains the constraints on `id`: everything that must load before it
    /// and everything it must load before, each with the rule that said so.
    ///
    /// ```
    /// use plugin_order::{ OrderGraph, PluginId };
    ///
    /// let mut graph = OrderGraph::new();
    /// graph.add_edge( "rules.txt:3 [Order]", PluginId::new( "a.esp" ), PluginId::new( "b.esp" ));
    ///
    /// let text = graph.explain( &PluginId::new( "b.esp" ));
    /// assert!( text.contains( "a.esp  (rules.txt:3 [Order])" ));
    /// ```
    pub fn explain( &self, id: &PluginId ) -> String {

        let Some( &node ) = self.index.get( id ) else {
            return format!( "{} is not a known plugin\n", id )
        };
        let mut text = format!( "{}\n", id );
        if let Some( placement ) = self.placement( id ) {
            let _ = writeln!( text, "  placement: {}", placement );
        }

        for ( heading, direction ) in [( "loads after:", Incoming ), ( "loads before:", Outgoing )] {
            let _ = writeln!( text, "  {}", heading );
            let edges = self.graph.edges_directed( node, direction ).sorted_by_key(| edge | edge.id() ).collect_vec();
            if edges.is_empty() { let _ = writeln!( text, "    (nothing)" ); }
            for edge in edges {
                let other = match direction {
                    Incoming => edge.source(),
                    Outgoing => edge.target(),
                };
                let _ = writeln!( text, "    {}{}", self.graph[other], describe( edge.weight() ));
            }
        }

        text

    }

}

fn describe( description: &str ) -> String {
    match description.is_empty() {
        true => String::new(),
        false => format!( "  ({})", description ),
    }
}

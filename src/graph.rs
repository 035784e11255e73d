//! The ordering graph.
//!
//! An [`OrderGraph`] is a directed graph over [`PluginId`]s in which an edge
//! `before → after` means "`before` must load earlier than `after`". Edges are
//! checked for cycles as they are inserted, so the graph is acyclic after every
//! call and [`OrderGraph::linearize`] can never fail. Rules that would close a
//! cycle are dropped and reported; the rules inserted first win.
//!
//! Nodes exist independently of edges: a plugin nobody has a rule for is still
//! part of the linearization.

use std::collections::HashMap ;
use petgraph::algo::has_path_connecting ;
use petgraph::stable_graph::{ NodeIndex, StableDiGraph };
use tracing::{ debug, trace };

use crate::{ PluginId, Message };

mod linearize ;
mod explain ;



/// An accepted "must load before" constraint.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct OrderEdge {
    pub before: PluginId,
    pub after: PluginId,
    /// What created the edge, e.g. `mlox_base.txt:120 [Order]` or `current order`.
    pub description: String,
}

impl OrderEdge {
    pub fn new( description: impl Into<String>, before: PluginId, after: PluginId ) -> Self {
        Self { before, after, description: description.into() }
    }
}

impl std::fmt::Display for OrderEdge {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        write!( f, "{} -> {}", self.before, self.after )
    }
}

/// Soft placement preference pulling an otherwise unconstrained plugin
/// toward one end of the order.
#[derive( Copy, Clone, Debug, PartialEq, Eq, Hash )]
pub enum Placement {
    NearStart,
    NearEnd,
}

impl std::fmt::Display for Placement {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.write_str( match self {
            Self::NearStart => "near start",
            Self::NearEnd => "near end",
        })
    }
}

/// Whether a rejected edge is reported in the message log.
#[derive( Copy, Clone, Debug, PartialEq, Eq )]
enum Strength {
    /// A rule the user should hear about when it is dropped.
    Rule,
    /// A tie-breaker; dropping it is expected and only traced.
    Soft,
}

/// Acyclic graph of load-order constraints between plugins.
///
/// ```
/// use plugin_order::{ OrderGraph, PluginId };
///
/// let ( a, b, c ) = ( PluginId::new( "a.esp" ), PluginId::new( "b.esp" ), PluginId::new( "c.esp" ));
/// let mut graph = OrderGraph::new();
/// assert!( graph.add_edge( "", a.clone(), b.clone() ));
/// assert!( graph.add_edge( "", b.clone(), c.clone() ));
///
/// // c -> a would close the cycle a -> b -> c -> a
/// assert!( !graph.add_edge( "", c.clone(), a.clone() ));
/// assert_eq!( graph.edges().len(), 2 );
/// assert_eq!( graph.messages().len(), 1 );
///
/// assert_eq!( graph.linearize( &[]), vec![ a, b, c ]);
/// ```
#[derive( Debug, Default )]
pub struct OrderGraph {
    /// Nodes are plugins, edge weights the descriptions of the rules that made them.
    graph: StableDiGraph<PluginId, String>,
    index: HashMap<PluginId, NodeIndex>,
    placements: HashMap<PluginId, Placement>,
    messages: Vec<Message>,
}

impl OrderGraph {

    pub fn new() -> Self { Self::default() }

    /// Registers `id` as a node. Idempotent.
    pub fn add_node( &mut self, id: PluginId ) {
        self.node_index( id );
    }

    fn node_index( &mut self, id: PluginId ) -> NodeIndex {
        if let Some( &index ) = self.index.get( &id ) { return index }
        let index = self.graph.add_node( id.clone() );
        self.index.insert( id, index );
        index
    }

    /// Inserts the constraint `before → after` unless it would close a cycle.
    ///
    /// Both endpoints are registered as nodes either way. A rejected edge leaves
    /// the graph's edges untouched, is recorded in the message log together with
    /// `description`, and makes this return `false`. Inserting an edge that
    /// already exists is a no-op returning `true`.
    pub fn add_edge( &mut self, description: impl Into<String>, before: PluginId, after: PluginId ) -> bool {
        self.insert_edge( description.into(), before, after, Strength::Rule )
    }

    /// Like [`add_edge`]( Self::add_edge ), but a rejection is not recorded in
    /// the message log. Used for tie-breaking constraints such as the current
    /// load order, which are expected to lose against rules.
    pub fn add_soft_edge( &mut self, description: impl Into<String>, before: PluginId, after: PluginId ) -> bool {
        self.insert_edge( description.into(), before, after, Strength::Soft )
    }

    fn insert_edge( &mut self, description: String, before: PluginId, after: PluginId, strength: Strength ) -> bool {

        let from = self.node_index( before );
        let to = self.node_index( after );

        if self.graph.find_edge( from, to ).is_some() { return true }

        // a path after → … → before, of length zero for a self edge, would close a cycle
        if has_path_connecting( &self.graph, to, from, None ) {
            let edge = OrderEdge::new( description, self.graph[from].clone(), self.graph[to].clone() );
            match strength {
                Strength::Rule => {
                    debug!( edge = %edge, description = %edge.description, "rejected edge closing a cycle" );
                    self.messages.push( Message::warning( match edge.description.is_empty() {
                        true => format!( "Cycle detected, not adding: {}", edge ),
                        false => format!( "Cycle detected, not adding: {} ({})", edge, edge.description ),
                    }));
                },
                Strength::Soft => trace!( edge = %edge, description = %edge.description, "dropped soft edge" ),
            }
            return false
        }

        self.graph.add_edge( from, to, description );
        true

    }

    /// Whether `before` must load earlier than `after` through accepted edges.
    pub fn precedes( &self, before: &PluginId, after: &PluginId ) -> bool {
        match ( self.index.get( before ), self.index.get( after )) {
            ( Some( &from ), Some( &to )) if from != to => has_path_connecting( &self.graph, from, to, None ),
            _ => false,
        }
    }

    /// Tags `id` near-start, registering it as a node.
    ///
    /// A plugin keeps the first placement it receives; tagging it toward the
    /// other end is rejected with a warning and returns `false`.
    pub fn tag_near_start( &mut self, id: PluginId ) -> bool {
        self.tag( id, Placement::NearStart )
    }

    /// Tags `id` near-end, registering it as a node. See [`tag_near_start`]( Self::tag_near_start ).
    pub fn tag_near_end( &mut self, id: PluginId ) -> bool {
        self.tag( id, Placement::NearEnd )
    }

    /// Tags `id` with `placement`. See [`tag_near_start`]( Self::tag_near_start ).
    pub fn tag( &mut self, id: PluginId, placement: Placement ) -> bool {
        self.add_node( id.clone() );
        match self.placements.get( &id ) {
            Some( &existing ) if existing != placement => {
                debug!( plugin = %id, %existing, requested = %placement, "conflicting placement ignored" );
                self.messages.push( Message::warning( format!(
                    "{} is already tagged {}, ignoring {} tag", id, existing, placement,
                )));
                false
            },
            Some( _ ) => true,
            None => {
                self.placements.insert( id, placement );
                true
            },
        }
    }

    /// The placement tag of `id`, if any.
    pub fn placement( &self, id: &PluginId ) -> Option<Placement> {
        self.placements.get( id ).copied()
    }

    /// Whether `id` carries any placement tag.
    pub fn is_tagged( &self, id: &PluginId ) -> bool {
        self.placements.contains_key( id )
    }

    /// Whether `id` is a registered node.
    pub fn contains( &self, id: &PluginId ) -> bool {
        self.index.contains_key( id )
    }

    /// Registered nodes in insertion order.
    pub fn nodes( &self ) -> impl Iterator<Item = &PluginId> {
        self.graph.node_indices().map(| node | &self.graph[node] )
    }

    /// Accepted edges in insertion order.
    pub fn edges( &self ) -> Vec<OrderEdge> {
        self.graph.edge_indices()
            .filter_map(| edge | self.graph.edge_endpoints( edge ).map(|( from, to )| OrderEdge::new(
                self.graph[edge].clone(),
                self.graph[from].clone(),
                self.graph[to].clone(),
            )))
            .collect()
    }

    pub fn edge_count( &self ) -> usize { self.graph.edge_count() }

    /// Messages logged so far: rejected rule edges and conflicting tags.
    pub fn messages( &self ) -> &[Message] { &self.messages }

    /// Drains the message log.
    pub fn take_messages( &mut self ) -> Vec<Message> {
        std::mem::take( &mut self.messages )
    }

}

use crate::{ Hint, HintMap, LoadOrder, OrderGraph, PluginId };



/// A resolved load order together with the graph that produced it.
#[derive( Debug )]
pub struct Resolution {
    pub(super) order: Vec<PluginId>,
    pub(super) hints: HintMap,
    pub(super) graph: OrderGraph,
    pub(super) previous: LoadOrder,
}

impl Resolution {

    /// The new load order, a permutation of the input snapshot.
    pub fn order( &self ) -> &[PluginId] { &self.order }

    pub fn into_order( self ) -> Vec<PluginId> { self.order }

    /// Diagnostic hints collected from all rule sources.
    pub fn hints( &self ) -> &HintMap { &self.hints }

    /// The graph the order was linearized from, kept for [`explain`]( Self::explain ) queries.
    pub fn graph( &self ) -> &OrderGraph { &self.graph }

    /// The snapshot the resolution started from.
    pub fn previous( &self ) -> &LoadOrder { &self.previous }

    /// Whether the new order equals the snapshot.
    pub fn is_sorted( &self ) -> bool { self.order == self.previous.as_slice() }

    /// Why `id` sits where it does. See [`OrderGraph::explain`].
    pub fn explain( &self, id: &PluginId ) -> String { self.graph.explain( id ) }

    /// The new order annotated with each plugin's previous position and hint.
    ///
    /// Runs of plugins that moved earlier are flagged as [`moved`]( AnnotatedPlugin::moved ).
    pub fn annotated( &self ) -> Vec<AnnotatedPlugin> {
        let previous_positions = self.order.iter()
            .map(| id | self.previous.position( id ).map_or( 0, | position | position + 1 ))
            .collect::<Vec<_>>();
        let mut moved = false ;
        self.order.iter().enumerate().map(|( index, id )| {
            let previous_position = previous_positions[index];
            if previous_position > index + 1 { moved = true }
            let entry = AnnotatedPlugin { id: id.clone(), previous_position, hint: self.hints.get( id ).copied(), moved };
            if previous_positions.get( index + 1 ).is_some_and(| &next | previous_position > next ) { moved = false }
            entry
        }).collect()
    }

}

/// One line of an annotated load order.
///
/// Renders as the previous position framed by a marker, then the plugin:
/// `_001_ a.esp`, `*003* b.esp` when moved, or the [`Hint::marker`] of its hint.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct AnnotatedPlugin {
    pub id: PluginId,
    /// 1-based position in the previous order.
    pub previous_position: usize,
    pub hint: Option<Hint>,
    /// Part of a run of plugins that moved earlier.
    pub moved: bool,
}

impl std::fmt::Display for AnnotatedPlugin {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        let marker = match ( self.hint, self.moved ) {
            ( Some( hint ), _ ) => hint.marker(),
            ( None, true ) => "*",
            ( None, false ) => "_",
        };
        write!( f, "{marker}{:03}{marker} {}", self.previous_position, self.id )
    }
}

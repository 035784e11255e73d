//! The resolution driver.
//!
//! A resolution runs in a fixed sequence of stages over one [`OrderGraph`]:
//!
//! 1. every plugin of the snapshot is registered as a node;
//! 2. rule sources are compiled in precedence order and their edges inserted,
//!    so rules from earlier sources win cycles against later ones;
//! 3. the game's own masters are chained and, when enabled, every master is
//!    pulled ahead of every non-master;
//! 4. the current order is injected as soft edges between untagged plugins;
//! 5. near-end plugins are pushed behind every untagged plugin;
//! 6. the graph is linearized with the snapshot as tie-break and checked to be
//!    a permutation of the snapshot.
//!
//! Stages 3 to 5 only add soft edges: they never override a rule, and a
//! rejected soft edge is not reported.

use itertools::Itertools ;
use tracing::{ debug, error, info };

use crate::{ HintMap, LoadOrder, Message, MetadataProvider, OrderGraph, PluginId, Placement, ResolverConfig, RuleCompiler };
use crate::utils::PartialResult ;

mod rule_source ;
mod resolve_error ;
mod resolution ;

pub use rule_source::RuleSource ;
pub use resolve_error::ResolveError ;
pub use resolution::{ Resolution, AnnotatedPlugin };



const CURRENT_ORDER: &str = "current order" ;
const MASTERS_FIRST: &str = "masters first" ;
const GAME_MASTERS: &str = "game masters" ;
const NEAR_END: &str = "near end" ;

/// Computes load orders from rule sources.
///
/// ```
/// use plugin_order::{ LoadOrder, NoMetadata, PluginId, Resolver, ResolverConfig, RuleSource };
///
/// let ( snapshot, _ ) = LoadOrder::from_names([ "b.esp", "c.esp", "a.esm" ]);
/// let rules = RuleSource::mandatory( "mlox_base.txt", "[Order]\na.esm\nb.esp\n\n[Order]\nc.esp\nb.esp\n" );
///
/// let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
/// let ( resolution, messages ) = resolver.resolve( &snapshot, &[ rules ]).unwrap();
///
/// assert_eq!( resolution.order(), [ "a.esm", "c.esp", "b.esp" ].map( PluginId::new ));
/// assert!( messages.is_empty() );
/// ```
#[derive( Clone, Debug )]
pub struct Resolver<M> {
    config: ResolverConfig,
    metadata: M,
}

impl<M: MetadataProvider> Resolver<M> {

    pub fn new( config: ResolverConfig, metadata: M ) -> Self {
        Self { config, metadata }
    }

    pub fn config( &self ) -> &ResolverConfig { &self.config }

    /// Resolves a new load order for `snapshot`.
    ///
    /// `sources` are given in precedence order, most specific first. Every
    /// compromise made along the way (skipped rule lines, rejected edges,
    /// conflicting tags) and every finding of the rules is returned as a
    /// message, on success and on failure alike.
    ///
    /// # Errors
    /// * [`ResolveError::NoPlugins`] if `snapshot` is empty.
    /// * [`ResolveError::MandatorySourceFailed`] if a mandatory source has a malformed line.
    /// * [`ResolveError::InvariantViolation`] if the result isn't a permutation of `snapshot`.
    pub fn resolve( &self, snapshot: &LoadOrder, sources: &[RuleSource] ) -> PartialResult<Resolution, ResolveError, Message> {

        if snapshot.is_empty() {
            error!( "no plugins to resolve" );
            return Err(( ResolveError::NoPlugins, Vec::new() ))
        }

        let mut graph = OrderGraph::new();
        snapshot.iter().for_each(| id | graph.add_node( id.clone() ));

        let ( hints, mut messages ) = self.load_rules( &mut graph, snapshot, sources )?;

        if let Some( game ) = self.config.game { add_game_masters( &mut graph, snapshot, &game.base_masters() ) }
        if self.config.masters_first { add_masters_first( &mut graph, snapshot ) }
        add_current_order( &mut graph, snapshot );
        add_near_end( &mut graph, snapshot );

        let order = graph.linearize( snapshot.as_slice() )
            .into_iter()
            .filter(| id | snapshot.contains( id ))
            .collect_vec();

        if order.len() != snapshot.len() {
            error!( expected = snapshot.len(), found = order.len(), "resolved order is not a permutation of the snapshot" );
            return Err(( ResolveError::InvariantViolation { expected: snapshot.len(), found: order.len() }, messages ))
        }

        let resolution = Resolution { order, hints, graph, previous: snapshot.clone() };
        if resolution.is_sorted() {
            messages.push( Message::info( "Plugins already in sorted order, no sorting needed" ));
        }
        info!(
            plugins = resolution.order.len(),
            edges = resolution.graph.edge_count(),
            sorted = resolution.is_sorted(),
            messages = messages.len(),
            "resolved load order",
        );
        Ok(( resolution, messages ))

    }

    fn load_rules( &self, graph: &mut OrderGraph, snapshot: &LoadOrder, sources: &[RuleSource] ) -> PartialResult<HintMap, ResolveError, Message> {

        let compiler = RuleCompiler::new( snapshot, &self.metadata );
        let mut hints = HintMap::new();
        let mut messages = Vec::new();

        for source in sources {

            let ( rules, source_messages ) = compiler.compile( &source.name, &source.text );
            messages.extend( source_messages );

            if !rules.ok && source.mandatory {
                error!( source = %source.name, "mandatory rule source failed to compile" );
                return Err(( ResolveError::MandatorySourceFailed { name: source.name.clone() }, messages ))
            }

            let accepted = rules.edges.into_iter()
                .filter(| edge | graph.add_edge( edge.description.clone(), edge.before.clone(), edge.after.clone() ))
                .count();
            rules.placements.into_iter().for_each(|( id, placement )| { graph.tag( id, placement ); });
            hints.extend( rules.hints );
            messages.extend( graph.take_messages() );

            debug!( source = %source.name, accepted, "loaded rule source" );

        }

        Ok(( hints, messages ))

    }

}

/// Chains the game's own masters in their fixed order and puts every other
/// active master behind the last of them.
fn add_game_masters( graph: &mut OrderGraph, snapshot: &LoadOrder, base_masters: &[PluginId] ) {
    let present = base_masters.iter().filter(| id | snapshot.contains( id )).collect_vec();
    for ( before, after ) in present.iter().tuple_windows() {
        graph.add_soft_edge( GAME_MASTERS, ( *before ).clone(), ( *after ).clone() );
    }
    if let Some( &last ) = present.last() {
        snapshot.iter()
            .filter(| id | id.is_master() && !base_masters.contains( id ))
            .for_each(| id | { graph.add_soft_edge( GAME_MASTERS, last.clone(), id.clone() ); });
    }
}

fn add_masters_first( graph: &mut OrderGraph, snapshot: &LoadOrder ) {
    let ( masters, plugins ): ( Vec<_>, Vec<_> ) = snapshot.iter().partition(| id | id.is_master() );
    for ( master, plugin ) in masters.iter().cartesian_product( &plugins ) {
        graph.add_soft_edge( MASTERS_FIRST, ( *master ).clone(), ( *plugin ).clone() );
    }
}

/// Anchors every untagged plugin behind the nearest earlier untagged plugin
/// of the snapshot that the graph accepts as its predecessor.
fn add_current_order( graph: &mut OrderGraph, snapshot: &LoadOrder ) {
    let untagged = snapshot.iter().filter(| id | !graph.is_tagged( id )).collect_vec();
    let ( mut anchored, mut unanchored ) = ( 0_usize, 0_usize );
    for ( index, &id ) in untagged.iter().enumerate().skip( 1 ) {
        match untagged[..index].iter().rev().any(| &before | graph.add_soft_edge( CURRENT_ORDER, before.clone(), id.clone() )) {
            true => anchored += 1,
            false => unanchored += 1,
        }
    }
    debug!( anchored, unanchored, "injected current order" );
}

/// Puts every untagged plugin ahead of every near-end plugin.
fn add_near_end( graph: &mut OrderGraph, snapshot: &LoadOrder ) {
    let ( near_end, untagged ): ( Vec<_>, Vec<_> ) = snapshot.iter()
        .filter(| id | graph.placement( id ) != Some( Placement::NearStart ))
        .partition(| id | graph.placement( id ) == Some( Placement::NearEnd ));
    for ( last, other ) in near_end.iter().cartesian_product( &untagged ) {
        graph.add_soft_edge( NEAR_END, ( *other ).clone(), ( *last ).clone() );
    }
}

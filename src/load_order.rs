//! The player's current load order.

use std::collections::HashMap ;
use pipe_trait::Pipe ;

use crate::{ PluginId, Message, dedupe_caseless };
use crate::utils::PartialSuccess ;



/// Ordered sequence of distinct active plugins, immutable input to one resolution.
///
/// Doubles as the active-plugin set the rule compiler checks rules against:
/// lookups are constant time and wildcard expansion follows snapshot order.
#[derive( Clone, Debug, Default, PartialEq, Eq )]
pub struct LoadOrder {
    order: Vec<PluginId>,
    positions: HashMap<PluginId, usize>,
}

impl LoadOrder {

    /// Builds a snapshot from plugin file names as read from a game configuration.
    ///
    /// Names are compared without regard to case; the first occurrence wins and
    /// every later duplicate is reported as a warning.
    ///
    /// ```
    /// use plugin_order::LoadOrder ;
    ///
    /// let ( order, warnings ) = LoadOrder::from_names([ "Morrowind.esm", "a.esp", "A.ESP" ]);
    /// assert_eq!( order.len(), 2 );
    /// assert_eq!( warnings.len(), 1 );
    /// ```
    pub fn from_names<S: AsRef<str>>( names: impl IntoIterator<Item = S> ) -> PartialSuccess<Self, Message> {
        let ( unique, duplicates ) = dedupe_caseless( names );
        let warnings = duplicates.iter()
            .map(| name | Message::warning( format!( "Duplicate plugin in load order: {}", name.as_ref().trim() )))
            .collect();
        ( unique.iter().map( PluginId::new ).pipe( Self::from_ids ), warnings )
    }

    /// Builds a snapshot from ids. Later duplicates are dropped silently.
    pub fn from_ids( ids: impl IntoIterator<Item = PluginId> ) -> Self {
        ids.into_iter().fold( Self::default(), | mut acc, id | {
            if !acc.positions.contains_key( &id ) {
                acc.positions.insert( id.clone(), acc.order.len() );
                acc.order.push( id );
            }
            acc
        })
    }

    /// Plugins in load order.
    #[inline] pub fn as_slice( &self ) -> &[PluginId] { &self.order }

    #[inline] pub fn iter( &self ) -> std::slice::Iter<'_, PluginId> { self.order.iter() }

    #[inline] pub fn len( &self ) -> usize { self.order.len() }

    #[inline] pub fn is_empty( &self ) -> bool { self.order.is_empty() }

    /// Whether `id` is active.
    #[inline] pub fn contains( &self, id: &PluginId ) -> bool { self.positions.contains_key( id ) }

    /// 0-based position of `id` in the snapshot.
    #[inline] pub fn position( &self, id: &PluginId ) -> Option<usize> { self.positions.get( id ).copied() }

}

impl FromIterator<PluginId> for LoadOrder {
    fn from_iter<T: IntoIterator<Item = PluginId>>( iter: T ) -> Self { Self::from_ids( iter )}
}

impl<'a> IntoIterator for &'a LoadOrder {
    type Item = &'a PluginId ;
    type IntoIter = std::slice::Iter<'a, PluginId>;
    fn into_iter( self ) -> Self::IntoIter { self.order.iter() }
}

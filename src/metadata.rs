//! Plugin metadata consumed by conditional rule predicates.
//!
//! Rules may be conditioned on a plugin's file size (`[SIZE …]`), its
//! description (`[DESC …]`) or its version (`[VER …]`). The engine never looks
//! at plugin files itself; it asks a [`MetadataProvider`]. A provider that
//! cannot answer returns `None`, and the predicate then counts as satisfied.

use std::collections::HashMap ;

use crate::{ PluginId, Version };



/// Versions known for a plugin.
#[derive( Clone, Debug, Default, PartialEq, Eq )]
pub struct PluginVersions {
    /// Version found in the plugin's file name.
    pub file: Option<Version>,
    /// Version found in the plugin's description.
    pub description: Option<Version>,
}

impl PluginVersions {
    /// The version rule predicates compare against: the description version
    /// when there is one, the file name version otherwise.
    pub fn preferred( &self ) -> Option<&Version> {
        self.description.as_ref().or( self.file.as_ref() )
    }
}

/// Source of plugin facts for conditional predicates.
///
/// Implementations backed by a live installation read file sizes and plugin
/// headers; implementations working from a plain plugin list know nothing and
/// answer `None` everywhere (see [`NoMetadata`]).
///
/// Providers shared between concurrent resolutions must be thread safe on their own.
pub trait MetadataProvider {

    /// Size of the plugin file in bytes.
    fn file_size( &self, id: &PluginId ) -> Option<u64> ;

    /// Versions found in the plugin's file name and description.
    fn version_strings( &self, id: &PluginId ) -> Option<PluginVersions> ;

    /// The plugin's description text from its header.
    fn description( &self, _id: &PluginId ) -> Option<String> { None }

}

impl<M: MetadataProvider + ?Sized> MetadataProvider for &M {
    fn file_size( &self, id: &PluginId ) -> Option<u64> { ( **self ).file_size( id )}
    fn version_strings( &self, id: &PluginId ) -> Option<PluginVersions> { ( **self ).version_strings( id )}
    fn description( &self, id: &PluginId ) -> Option<String> { ( **self ).description( id )}
}

/// Provider for resolutions without filesystem access. Knows nothing.
#[derive( Copy, Clone, Debug, Default )]
pub struct NoMetadata ;

impl MetadataProvider for NoMetadata {
    fn file_size( &self, _id: &PluginId ) -> Option<u64> { None }
    fn version_strings( &self, _id: &PluginId ) -> Option<PluginVersions> { None }
}

/// Provider answering from facts gathered up front.
///
/// Versions are derived from the registered file name and description when
/// they are not set explicitly.
///
/// ```
/// use plugin_order::{ MetadataProvider, PluginId, StaticMetadata };
///
/// let metadata = StaticMetadata::new()
///     .with_size( "big.esp", 1024 )
///     .with_description( "big.esp", "A big mod. Version: 2.1" );
///
/// let id = PluginId::new( "big.esp" );
/// assert_eq!( metadata.file_size( &id ), Some( 1024 ));
/// assert_eq!( metadata.version_strings( &id ).unwrap().preferred().unwrap().to_string(), "2.1" );
/// ```
#[derive( Clone, Debug, Default )]
pub struct StaticMetadata {
    sizes: HashMap<PluginId, u64>,
    descriptions: HashMap<PluginId, String>,
    file_names: HashMap<PluginId, String>,
}

impl StaticMetadata {

    pub fn new() -> Self { Self::default() }

    /// Records a plugin's file size.
    pub fn with_size( mut self, name: impl AsRef<str>, size: u64 ) -> Self {
        self.sizes.insert( PluginId::new( name.as_ref() ), size );
        self
    }

    /// Records a plugin's description text.
    pub fn with_description( mut self, name: impl AsRef<str>, description: impl Into<String> ) -> Self {
        self.descriptions.insert( PluginId::new( name.as_ref() ), description.into() );
        self
    }

    /// Records the on-disk spelling of a plugin's file name, used for the file name version.
    pub fn with_file_name( mut self, name: impl AsRef<str> ) -> Self {
        self.file_names.insert( PluginId::new( name.as_ref() ), name.as_ref().to_string() );
        self
    }

    fn knows( &self, id: &PluginId ) -> bool {
        self.sizes.contains_key( id ) || self.descriptions.contains_key( id ) || self.file_names.contains_key( id )
    }

}

impl MetadataProvider for StaticMetadata {

    fn file_size( &self, id: &PluginId ) -> Option<u64> {
        self.sizes.get( id ).copied()
    }

    fn version_strings( &self, id: &PluginId ) -> Option<PluginVersions> {
        if !self.knows( id ) { return None }
        let file_name = self.file_names.get( id ).map_or( id.as_str(), String::as_str );
        Some( PluginVersions {
            file: Version::from_file_name( file_name ),
            description: self.descriptions.get( id ).and_then(| text | Version::from_description( text )),
        })
    }

    fn description( &self, id: &PluginId ) -> Option<String> {
        self.descriptions.get( id ).cloned()
    }

}

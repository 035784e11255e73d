//! Canonical plugin identity.
//!
//! Plugin file names are compared without regard to case: `Morrowind.esm` and
//! `morrowind.esm` name the same plugin. A [`PluginId`] stores the lowercase
//! form only. Keeping the original spelling around for display is the job of
//! whoever reads the file names from disk.

/// File extensions that mark a plugin as a master file.
pub const MASTER_EXTENSIONS: [&str; 2] = [ ".esm", ".omwgame" ];

/// Every file extension recognised as a plugin.
pub const PLUGIN_EXTENSIONS: [&str; 5] = [ ".esm", ".esp", ".omwaddon", ".omwscripts", ".omwgame" ];

/// Canonical, case-insensitive identifier of a plugin file.
///
/// All graph and rule operations key on this type exclusively.
///
/// ```
/// use plugin_order::PluginId ;
///
/// assert_eq!( PluginId::new( "Tribunal.ESM" ), PluginId::new( "tribunal.esm" ));
/// assert!( PluginId::new( "Tribunal.ESM" ).is_master() );
/// ```
#[derive( Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord )]
pub struct PluginId( String );

impl PluginId {

    /// Canonicalises a file name into an id.
    pub fn new( name: impl AsRef<str> ) -> Self {
        Self( name.as_ref().trim().to_lowercase() )
    }

    /// The canonical lowercase name.
    #[inline] pub fn as_str( &self ) -> &str { &self.0 }

    /// Whether the file name carries a master extension (`.esm`, `.omwgame`).
    pub fn is_master( &self ) -> bool {
        MASTER_EXTENSIONS.iter().any(| ext | self.0.ends_with( ext ))
    }

    /// Whether the file name carries any recognised plugin extension.
    pub fn has_plugin_extension( &self ) -> bool {
        PLUGIN_EXTENSIONS.iter().any(| ext | self.0.ends_with( ext ))
    }

}

impl std::fmt::Display for PluginId {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.write_str( &self.0 )
    }
}

impl From<&str> for PluginId {
    fn from( name: &str ) -> Self { Self::new( name )}
}

impl From<String> for PluginId {
    fn from( name: String ) -> Self { Self::new( name )}
}

impl From<PluginId> for String {
    fn from( id: PluginId ) -> Self { id.0 }
}

impl AsRef<str> for PluginId {
    fn as_ref( &self ) -> &str { &self.0 }
}

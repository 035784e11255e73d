//! Resolver configuration.
//!
//! Everything a resolution needs besides its inputs is carried in a
//! [`ResolverConfig`] value, usually read from a TOML file:
//!
//! ```toml
//! game = "Morrowind"
//! masters_first = true
//! rules_dir = "/home/me/.config/mlox"
//! base_rules = "mlox_base.txt"
//! ```

use std::path::{ Path, PathBuf };
use serde::Deserialize ;
use thiserror::Error ;

use crate::PluginId ;



/// Configuration and rule files could not be read.
#[derive( Debug, Error )]
pub enum ConfigError {
    #[error( "Failed to read {path}: {source}" )]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error( "Invalid configuration: {0}" )]
    Toml( #[from] toml::de::Error ),
    /// The base rule tier is mandatory.
    #[error( "Base rules not found at {0}" )]
    MissingBaseRules( PathBuf ),
}

/// Game whose hard-coded master files are ordered ahead of any rule.
#[derive( Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize )]
pub enum GameProfile {
    Morrowind,
    OpenMw,
    Oblivion,
}

impl GameProfile {

    /// The game's own master files in their required order.
    pub fn base_masters( self ) -> Vec<PluginId> {
        match self {
            Self::Morrowind | Self::OpenMw => vec![ "morrowind.esm", "tribunal.esm", "bloodmoon.esm" ],
            Self::Oblivion => vec![ "oblivion.esm" ],
        }.into_iter().map( PluginId::new ).collect()
    }

}

/// Settings of one resolution, passed explicitly to the [`Resolver`]( crate::Resolver ).
///
/// ```
/// use plugin_order::{ GameProfile, ResolverConfig };
///
/// let config = ResolverConfig::from_toml_str( r#"game = "Morrowind""# ).unwrap();
/// assert_eq!( config.game, Some( GameProfile::Morrowind ));
/// assert!( config.masters_first );
/// assert_eq!( config.base_rules, "mlox_base.txt" );
/// ```
#[derive( Clone, Debug, PartialEq, Eq, Deserialize )]
#[serde( default, deny_unknown_fields )]
pub struct ResolverConfig {
    pub game: Option<GameProfile>,
    /// Load master files ahead of other plugins unless a rule says otherwise.
    pub masters_first: bool,
    /// Directory holding the rule files.
    pub rules_dir: PathBuf,
    /// Personal override rules, highest precedence, optional.
    pub personal_rules: String,
    /// Shared user rules, optional.
    pub user_rules: String,
    /// Community base rules, lowest precedence, mandatory.
    pub base_rules: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            game: None,
            masters_first: true,
            rules_dir: PathBuf::from( "." ),
            personal_rules: "mlox_my_rules.txt".into(),
            user_rules: "mlox_user.txt".into(),
            base_rules: "mlox_base.txt".into(),
        }
    }
}

impl ResolverConfig {

    /// # Errors
    /// Returns [`ConfigError::Toml`] for malformed TOML, unknown keys or bad values.
    pub fn from_toml_str( text: &str ) -> Result<Self, ConfigError> {
        Ok( toml::from_str( text )? )
    }

    /// # Errors
    /// Returns [`ConfigError::Io`] if the file can't be read, otherwise as [`from_toml_str`]( Self::from_toml_str ).
    pub fn from_file( path: impl AsRef<Path> ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string( path )
            .map_err(| source | ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str( &text )
    }

    /// Paths of the rule tiers in precedence order: personal, user, base.
    pub fn rule_paths( &self ) -> [PathBuf; 3] {
        [ &self.personal_rules, &self.user_rules, &self.base_rules ]
            .map(| name | self.rules_dir.join( name ))
    }

}

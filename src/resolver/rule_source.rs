use std::path::Path ;
use tracing::debug ;

use crate::{ ConfigError, ResolverConfig };



/// The text of one rule file, ready for compilation.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct RuleSource {
    /// Shown in message locations and edge descriptions, usually the file name.
    pub name: String,
    pub text: String,
    /// Whether a parse error in this source aborts the resolution.
    pub mandatory: bool,
}

impl RuleSource {

    pub fn optional( name: impl Into<String>, text: impl Into<String> ) -> Self {
        Self { name: name.into(), text: text.into(), mandatory: false }
    }

    pub fn mandatory( name: impl Into<String>, text: impl Into<String> ) -> Self {
        Self { name: name.into(), text: text.into(), mandatory: true }
    }

    /// Reads the configured rule tiers in precedence order: personal, user, base.
    ///
    /// Missing personal and user files are skipped.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingBaseRules`] if the base file doesn't exist
    /// and [`ConfigError::Io`] if an existing file can't be read.
    pub fn load_tiers( config: &ResolverConfig ) -> Result<Vec<Self>, ConfigError> {

        let [ personal, user, base ] = config.rule_paths();
        if !base.exists() { return Err( ConfigError::MissingBaseRules( base )) }

        [( personal, false ), ( user, false ), ( base, true )]
            .into_iter()
            .filter(|( path, mandatory )| match *mandatory || path.exists() {
                true => true,
                false => { debug!( path = %path.display(), "optional rule file not found" ); false },
            })
            .map(|( path, mandatory )| Self::read( &path, mandatory ))
            .collect()

    }

    fn read( path: &Path, mandatory: bool ) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string( path )
            .map_err(| source | ConfigError::Io { path: path.to_path_buf(), source })?;
        let name = path.file_name().map_or_else(|| path.display().to_string(), | name | name.to_string_lossy().into_owned() );
        debug!( %name, bytes = text.len(), mandatory, "read rule file" );
        Ok( Self { name, text, mandatory })
    }

}

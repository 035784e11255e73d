use std::collections::HashMap ;

use crate::PluginId ;



/// Diagnostic category attached to a plugin for display purposes.
///
/// Hints never influence ordering. A plugin carries at most one hint; when
/// several rules want to annotate the same plugin, the last one wins.
#[derive( Copy, Clone, Debug, PartialEq, Eq, Hash )]
pub enum Hint {
    /// The plugin is part of a reported conflict.
    Conflict,
    /// The plugin is a patch whose master is missing.
    Patch,
    /// The plugin is missing something it requires.
    Requires,
}

impl Hint {
    /// Marker used around the position number in annotated load orders.
    pub const fn marker( self ) -> &'static str {
        match self {
            Self::Conflict => "*!",
            Self::Patch => "!!",
            Self::Requires => "!!!",
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.write_str( match self {
            Self::Conflict => "conflict",
            Self::Patch => "patch",
            Self::Requires => "requires",
        })
    }
}

/// Hint per plugin.
pub type HintMap = HashMap<PluginId, Hint>;

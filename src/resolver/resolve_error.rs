use thiserror::Error ;



/// Conditions under which no load order is produced.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum ResolveError {
    #[error( "No plugins detected, nothing to sort" )]
    NoPlugins,
    /// A rule source that must compile cleanly did not.
    #[error( "Unable to parse '{name}', load order NOT sorted" )]
    MandatorySourceFailed { name: String },
    /// The resolved order isn't a permutation of the input. This is a bug in
    /// the engine, not in the rules.
    #[error( "Internal error: resolved {found} plugins out of {expected}" )]
    InvariantViolation { expected: usize, found: usize },
}

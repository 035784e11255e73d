use thiserror::Error ;

use crate::version::InvalidVersion ;



/// A rule line that could not be understood.
///
/// The line is skipped; the rest of the source is still compiled.
#[derive( Debug, Error, Clone, PartialEq, Eq )]
pub enum RuleError {
    /// A header names a section that doesn't exist.
    #[error( "Unknown section: [{0}]" )]
    UnknownSection( String ),
    /// Rule text before the first section header.
    #[error( "Text outside of any section: '{0}'" )]
    OutsideSection( String ),
    /// A plugin name was expected but the text doesn't end in a plugin extension.
    #[error( "Expected a plugin name, found '{0}'" )]
    ExpectedPluginName( String ),
    /// A bracketed expression names an unknown predicate.
    #[error( "Unknown predicate: [{0}]" )]
    UnknownPredicate( String ),
    /// A bracketed expression is never closed.
    #[error( "Unterminated expression: '{0}'" )]
    Unterminated( String ),
    /// A predicate was given no operands.
    #[error( "[{0}] needs at least one operand" )]
    MissingOperand( &'static str ),
    #[error( "Invalid size: '{0}'" )]
    InvalidSize( String ),
    #[error( "Invalid comparison operator: '{0}', expected one of <, =, >" )]
    InvalidOperator( String ),
    #[error( transparent )]
    InvalidVersion( #[from] InvalidVersion ),
    /// A `[DESC]` pattern is not a valid regular expression.
    #[error( "Invalid regular expression: {0}" )]
    InvalidRegex( String ),
    /// Text left over after a complete expression.
    #[error( "Unexpected text after expression: '{0}'" )]
    TrailingInput( String ),
    /// `[Order]`, `[NearStart]` and `[NearEnd]` take plain plugin names only.
    #[error( "Predicates are not allowed in [{0}] sections" )]
    MisplacedPredicate( &'static str ),
    /// `[Requires]` and `[Patch]` take exactly two expressions.
    #[error( "[{section}] expects {expected} expressions, found {found}" )]
    WrongExpressionCount { section: &'static str, expected: usize, found: usize },
}

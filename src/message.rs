//! The user-facing diagnostic stream.
//!
//! Everything the engine had to compromise on (skipped rule lines, rejected
//! edges, conflicting tags) and everything the rules asked to tell the user
//! (conflicts, notes, missing requirements) ends up as a [`Message`]. A front
//! end decides its exit status by scanning the stream, see [`exit_status`].

use itertools::Itertools ;



/// How serious a [`Message`] is.
#[derive( Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash )]
pub enum Severity {
    /// Purely informational, e.g. a rule note or "already sorted".
    Info,
    /// Something had to be dropped or the user should act, e.g. a rejected edge.
    Warning,
    /// A rule line could not be understood or the run failed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.write_str( match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        })
    }
}

/// Where in a rule source something was found.
#[derive( Clone, Debug, PartialEq, Eq, Hash )]
pub struct Location {
    /// Name of the rule source, usually its file name.
    pub source: String,
    /// 1-based line number.
    pub line: usize,
}

impl Location {
    pub fn new( source: impl Into<String>, line: usize ) -> Self {
        Self { source: source.into(), line }
    }
}

impl std::fmt::Display for Location {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        write!( f, "{}:{}", self.source, self.line )
    }
}

/// A single entry of the diagnostic stream.
///
/// Renders as `SEVERITY [location] text`, with the location omitted when the
/// message does not come from a rule line. Multi-line texts keep their line breaks.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct Message {
    pub severity: Severity,
    pub location: Option<Location>,
    pub text: String,
}

impl Message {

    pub fn info( text: impl Into<String> ) -> Self {
        Self { severity: Severity::Info, location: None, text: text.into() }
    }

    pub fn warning( text: impl Into<String> ) -> Self {
        Self { severity: Severity::Warning, location: None, text: text.into() }
    }

    pub fn error( text: impl Into<String> ) -> Self {
        Self { severity: Severity::Error, location: None, text: text.into() }
    }

    /// Attaches the rule location the message originates from.
    pub fn at( mut self, location: Location ) -> Self {
        self.location = Some( location );
        self
    }

}

impl std::fmt::Display for Message {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        match &self.location {
            Some( location ) => write!( f, "{} [{}] {}", self.severity, location, self.text ),
            None => write!( f, "{} {}", self.severity, self.text ),
        }
    }
}

/// Renders a message stream one message per line.
pub fn render( messages: &[Message] ) -> String {
    messages.iter().join( "\n" )
}

/// Process exit status for a message stream: `1` if any error was reported,
/// otherwise `2` if any warning was reported, otherwise `0`.
///
/// ```
/// use plugin_order::{ Message, exit_status };
///
/// assert_eq!( exit_status( &[ Message::info( "sorted" )]), 0 );
/// assert_eq!( exit_status( &[ Message::info( "x" ), Message::warning( "y" )]), 2 );
/// assert_eq!( exit_status( &[ Message::warning( "y" ), Message::error( "z" )]), 1 );
/// ```
pub fn exit_status( messages: &[Message] ) -> i32 {
    match messages.iter().map(| message | message.severity ).max() {
        Some( Severity::Error ) => 1,
        Some( Severity::Warning ) => 2,
        Some( Severity::Info ) | None => 0,
    }
}

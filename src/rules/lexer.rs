//! Splits rule text into section blocks of logical lines.

use crate::utils::PartialSuccess ;
use super::{ RuleError, Section };
use super::expr::is_predicate ;



/// One logical rule line, possibly joined from several physical lines.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct Line {
    /// 1-based number of the first physical line.
    pub number: usize,
    pub text: String,
}

/// A section header and everything up to the next one.
#[derive( Clone, Debug, PartialEq, Eq )]
pub struct Block {
    pub section: Section,
    /// Line of the header.
    pub line: usize,
    /// Header trailing text and indented lines of message-bearing sections.
    pub message: Vec<String>,
    /// Expression lines.
    pub lines: Vec<Line>,
}

#[derive( Debug, Default )]
struct Lexer {
    blocks: Vec<Block>,
    errors: Vec<( usize, RuleError )>,
    /// Expression whose brackets are not balanced yet, with its open bracket count.
    pending: Option<( Line, isize )>,
    /// Set after a bad header; lines are dropped until the next good one.
    skipping: bool,
}

/// Splits `text` into blocks. Unknown headers and text outside any section
/// are reported with their line number and skipped.
pub fn blocks( text: &str ) -> PartialSuccess<Vec<Block>, ( usize, RuleError )> {
    let mut lexer = text.lines()
        .enumerate()
        .fold( Lexer::default(), | mut lexer, ( index, line )| {
            lexer.line( index + 1, strip_comment( line ).trim_end() );
            lexer
        });
    lexer.flush();
    ( lexer.blocks, lexer.errors )
}

impl Lexer {

    fn line( &mut self, number: usize, line: &str ) {

        if line.trim().is_empty() { return }
        let indented = line.starts_with( char::is_whitespace );

        if let Some( header ) = section_header( line ).filter(| _ | !indented ) {
            self.flush();
            match header {
                Ok(( section, message )) => {
                    self.skipping = false ;
                    self.blocks.push( Block {
                        section,
                        line: number,
                        message: Some( message ).filter(| message | !message.is_empty() ).into_iter().collect(),
                        lines: Vec::new(),
                    });
                },
                Err( err ) => {
                    self.skipping = true ;
                    self.errors.push(( number, err ));
                },
            }
            return
        }

        if let Some(( pending, depth )) = self.pending.as_mut() {
            pending.text.push( ' ' );
            pending.text.push_str( line.trim() );
            *depth += bracket_depth( line );
            if *depth <= 0 { self.flush() }
            return
        }

        if self.skipping { return }
        let Some( block ) = self.blocks.last_mut() else {
            self.skipping = true ;
            self.errors.push(( number, RuleError::OutsideSection( line.trim().to_string() )));
            return
        };

        if indented && block.section.takes_message() {
            block.message.push( line.trim().to_string() );
            return
        }

        let text = Line { number, text: line.trim().to_string() };
        match bracket_depth( line ) {
            depth if depth > 0 => self.pending = Some(( text, depth )),
            _ => block.lines.push( text ),
        }

    }

    /// Closes an expression still waiting for closing brackets.
    fn flush( &mut self ) {
        if let ( Some(( line, _ )), Some( block )) = ( self.pending.take(), self.blocks.last_mut() ) {
            block.lines.push( line );
        }
    }

}

/// Recognises `[Section] trailing text` at the start of a line.
///
/// Returns `None` for lines that are expressions, such as `[ALL …]`.
fn section_header( line: &str ) -> Option<Result<( Section, String ), RuleError>> {
    let rest = line.strip_prefix( '[' )?;
    let end = rest.find(| c: char | !c.is_ascii_alphabetic() ).unwrap_or( rest.len() );
    let ( keyword, after ) = rest.split_at( end );
    let trailing = after.strip_prefix( ']' )?;
    match Section::lookup( keyword ) {
        Some( section ) => Some( Ok(( section, trailing.trim().to_string() ))),
        None if is_predicate( keyword ) => None,
        None => Some( Err( RuleError::UnknownSection( keyword.to_string() ))),
    }
}

/// Cuts a `;` comment starting the line or following whitespace.
fn strip_comment( line: &str ) -> &str {
    line.char_indices()
        .find(|&( index, c )| c == ';' && line[..index].chars().next_back().is_none_or( char::is_whitespace ))
        .map_or( line, |( index, _ )| &line[..index] )
}

/// Open minus closed brackets, ignoring `/regex/` literals.
fn bracket_depth( text: &str ) -> isize {
    text.split( '/' )
        .step_by( 2 )
        .flat_map( str::chars )
        .map(| c | match c {
            '[' => 1,
            ']' => -1,
            _ => 0,
        })
        .sum()
}

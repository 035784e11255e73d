use itertools::Itertools ;

use crate::utils::PartialSuccess ;
use super::{ Expr, NamePattern, RuleError };
use super::lexer::Block ;



/// Rule file section kinds.
#[derive( Copy, Clone, Debug, PartialEq, Eq, Hash )]
pub enum Section {
    Order,
    NearStart,
    NearEnd,
    Conflict,
    Note,
    Requires,
    Patch,
}

type Builder = fn( Section, Block ) -> PartialSuccess<Option<Directive>, ( usize, RuleError )>;

const SECTIONS: &[( Section, &str, Builder )] = &[
    ( Section::Order, "Order", plugin_list ),
    ( Section::NearStart, "NearStart", plugin_list ),
    ( Section::NearEnd, "NearEnd", plugin_list ),
    ( Section::Conflict, "Conflict", expression_list ),
    ( Section::Note, "Note", expression_list ),
    ( Section::Requires, "Requires", expression_pair ),
    ( Section::Patch, "Patch", expression_pair ),
];

impl Section {

    /// Looks up a section header keyword, ignoring case.
    pub fn lookup( keyword: &str ) -> Option<Self> {
        SECTIONS.iter()
            .find(|( _, name, _ )| name.eq_ignore_ascii_case( keyword ))
            .map(|( section, _, _ )| *section )
    }

    pub fn name( self ) -> &'static str {
        SECTIONS.iter()
            .find(|( section, _, _ )| *section == self )
            .map_or( "", |( _, name, _ )| *name )
    }

    /// Whether indented lines of the section are message text rather than expressions.
    pub fn takes_message( self ) -> bool {
        matches!( self, Self::Conflict | Self::Note | Self::Requires | Self::Patch )
    }

    fn builder( self ) -> Option<Builder> {
        SECTIONS.iter()
            .find(|( section, _, _ )| *section == self )
            .map(|( _, _, builder )| *builder )
    }

}

impl std::fmt::Display for Section {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.write_str( self.name() )
    }
}

/// One parsed rule block.
#[derive( Clone, Debug )]
pub enum Directive {
    /// Consecutive names, each with the line it was written on.
    Order( Vec<( usize, NamePattern )> ),
    NearStart( Vec<NamePattern> ),
    NearEnd( Vec<NamePattern> ),
    Conflict { line: usize, message: String, expressions: Vec<Expr> },
    Note { line: usize, message: String, expressions: Vec<Expr> },
    Requires { line: usize, message: String, dependent: Expr, requirement: Expr },
    Patch { line: usize, message: String, patch: Expr, master: Expr },
}

impl Directive {

    /// Parses the lines of a block into a directive.
    ///
    /// Lines that fail to parse are reported with their line number and left
    /// out. A block left without a meaningful directive yields `None`.
    pub fn from_block( block: Block ) -> PartialSuccess<Option<Self>, ( usize, RuleError )> {
        match block.section.builder() {
            Some( build ) => build( block.section, block ),
            None => ( None, Vec::new() ),
        }
    }

}

fn parse_lines( block: &Block ) -> PartialSuccess<Vec<( usize, Expr )>, ( usize, RuleError )> {
    block.lines.iter()
        .map(| line | Expr::parse( &line.text )
            .map(| expr | ( line.number, expr ))
            .map_err(| err | ( line.number, err ))
        )
        .partition_result()
}

fn plugin_list( section: Section, block: Block ) -> PartialSuccess<Option<Directive>, ( usize, RuleError )> {

    let ( expressions, mut errors ) = parse_lines( &block );
    let ( names, misplaced ): ( Vec<_>, Vec<_> ) = expressions.into_iter()
        .map(|( line, expr )| match expr {
            Expr::Name( pattern ) => Ok(( line, pattern )),
            _ => Err(( line, RuleError::MisplacedPredicate( section.name() ))),
        })
        .partition_result();
    errors.extend( misplaced );

    let directive = match section {
        Section::NearStart => Directive::NearStart( names.into_iter().map(|( _, name )| name ).collect() ),
        Section::NearEnd => Directive::NearEnd( names.into_iter().map(|( _, name )| name ).collect() ),
        _ => Directive::Order( names ),
    };
    ( Some( directive ), errors )

}

fn expression_list( section: Section, block: Block ) -> PartialSuccess<Option<Directive>, ( usize, RuleError )> {
    let ( expressions, errors ) = parse_lines( &block );
    let expressions = expressions.into_iter().map(|( _, expr )| expr ).collect();
    let ( line, message ) = ( block.line, block.message.join( "\n" ));
    let directive = match section {
        Section::Note => Directive::Note { line, message, expressions },
        _ => Directive::Conflict { line, message, expressions },
    };
    ( Some( directive ), errors )
}

fn expression_pair( section: Section, block: Block ) -> PartialSuccess<Option<Directive>, ( usize, RuleError )> {

    let ( expressions, mut errors ) = parse_lines( &block );
    if !errors.is_empty() { return ( None, errors ) }

    let pair: Result<[( usize, Expr ); 2], _> = expressions.try_into();
    let Ok([( _, first ), ( _, second )]) = pair else {
        errors.push(( block.line, RuleError::WrongExpressionCount {
            section: section.name(),
            expected: 2,
            found: block.lines.len(),
        }));
        return ( None, errors )
    };

    let ( line, message ) = ( block.line, block.message.join( "\n" ));
    let directive = match section {
        Section::Patch => Directive::Patch { line, message, patch: first, master: second },
        _ => Directive::Requires { line, message, dependent: first, requirement: second },
    };
    ( Some( directive ), errors )

}

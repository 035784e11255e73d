//! Rule expressions: plugin names and the predicates combining them.
//!
//! Expressions are parsed by a small recursive-descent scanner over one
//! logical rule line. Bracketed predicates are dispatched through the
//! [`PREDICATES`] table, so a new predicate is one parser function and one
//! table entry.

use std::cmp::Ordering ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;
use regex::{ Regex, RegexBuilder };

use crate::{ LoadOrder, MetadataProvider, PluginId, Version };
use crate::plugin_id::PLUGIN_EXTENSIONS ;
use crate::version::VERSION_PATTERN ;
use super::RuleError ;



/// A plugin name as written in a rule, possibly with wildcards.
#[derive( Clone, Debug )]
pub enum NamePattern {
    /// A literal plugin name.
    Exact( PluginId ),
    /// A name containing `*`, `?` or `<VER>`, matched against every active plugin.
    Wildcard { text: String, regex: Regex },
}

impl NamePattern {

    /// Reads a plugin name. Fails unless the name ends in a plugin extension.
    ///
    /// ```
    /// use plugin_order::{ LoadOrder, NamePattern, PluginId };
    ///
    /// let active = LoadOrder::from_ids([ "BB 2.2.esp", "bb 3.esp", "other.esp" ].map( PluginId::new ));
    /// let pattern = NamePattern::parse( "BB <VER>.esp" ).unwrap();
    /// assert_eq!( pattern.matches( &active ), vec![ PluginId::new( "bb 2.2.esp" ), PluginId::new( "bb 3.esp" )]);
    /// ```
    pub fn parse( text: &str ) -> Result<Self, RuleError> {

        let id = PluginId::new( text );
        if !id.has_plugin_extension() {
            return Err( RuleError::ExpectedPluginName( text.trim().to_string() ))
        }
        if !id.as_str().contains([ '*', '?' ]) && !id.as_str().contains( "<ver>" ) {
            return Ok( Self::Exact( id ))
        }

        let pattern = id.as_str()
            .split( "<ver>" )
            .map(| part | part.chars().map(| c | match c {
                '*' => ".*".to_string(),
                '?' => ".".to_string(),
                c => regex::escape( &c.to_string() ),
            }).collect::<String>())
            .join( &format!( "(?:{})", VERSION_PATTERN ));

        let regex = Regex::new( &format!( "^{}$", pattern ))
            .map_err(| err | RuleError::InvalidRegex( err.to_string() ))?;
        Ok( Self::Wildcard { text: id.as_str().to_string(), regex })

    }

    /// Active plugins this name refers to, in snapshot order.
    pub fn matches( &self, active: &LoadOrder ) -> Vec<PluginId> {
        match self {
            Self::Exact( id ) => active.contains( id ).then(|| id.clone() ).into_iter().collect(),
            Self::Wildcard { regex, .. } => active.iter()
                .filter(| id | regex.is_match( id.as_str() ))
                .cloned()
                .collect(),
        }
    }

}

impl std::fmt::Display for NamePattern {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        match self {
            Self::Exact( id ) => write!( f, "{}", id ),
            Self::Wildcard { text, .. } => f.write_str( text ),
        }
    }
}

/// A parsed rule expression.
#[derive( Clone, Debug )]
pub enum Expr {
    /// True when any active plugin matches.
    Name( NamePattern ),
    /// `[ALL e…]`: true when every operand is.
    All( NEVec<Expr> ),
    /// `[ANY e…]`: true when at least one operand is.
    Any( NEVec<Expr> ),
    /// `[NOT e]`
    Not( Box<Expr> ),
    /// `[DESC /regex/ plugin]`, or `[DESC !/regex/ plugin]` when negated.
    Desc { pattern: Regex, negated: bool, plugin: NamePattern },
    /// `[SIZE n plugin]`, or `[SIZE !n plugin]` when negated.
    Size { size: u64, negated: bool, plugin: NamePattern },
    /// `[VER op version plugin]`. `op` is the required ordering of the
    /// plugin's version relative to `version`.
    Ver { op: Ordering, version: Version, plugin: NamePattern },
}

/// Result of evaluating an [`Expr`].
#[derive( Clone, Debug, Default, PartialEq, Eq )]
pub struct Outcome {
    pub holds: bool,
    /// Active plugins that made the expression true, in evaluation order.
    pub plugins: Vec<PluginId>,
}

impl Outcome {
    fn from_matches( plugins: Vec<PluginId> ) -> Self {
        Self { holds: !plugins.is_empty(), plugins }
    }
}

type Parser = fn( &mut Cursor<'_> ) -> Result<Expr, RuleError>;

const PREDICATES: &[( &str, Parser )] = &[
    ( "ALL", parse_all ),
    ( "ANY", parse_any ),
    ( "NOT", parse_not ),
    ( "DESC", parse_desc ),
    ( "SIZE", parse_size ),
    ( "VER", parse_ver ),
];

/// Whether `word` names a bracketed predicate.
pub(crate) fn is_predicate( word: &str ) -> bool {
    PREDICATES.iter().any(|( name, _ )| name.eq_ignore_ascii_case( word ))
}

impl Expr {

    /// Parses one complete expression. Trailing text is an error.
    ///
    /// ```
    /// use plugin_order::Expr ;
    ///
    /// let expr = Expr::parse( "[ALL Foo Bar.esp [NOT baz.esm]]" ).unwrap();
    /// assert_eq!( expr.to_string(), "[ALL foo bar.esp [NOT baz.esm]]" );
    /// assert!( Expr::parse( "[SOME a.esp]" ).is_err() );
    /// ```
    pub fn parse( text: &str ) -> Result<Self, RuleError> {
        let mut cursor = Cursor::new( text );
        let expr = expression( &mut cursor )?;
        cursor.skip_whitespace();
        match cursor.rest() {
            "" => Ok( expr ),
            rest => Err( RuleError::TrailingInput( rest.to_string() )),
        }
    }

    /// Evaluates against the active set. Metadata checks on an active plugin
    /// hold when `metadata` cannot answer; on an absent plugin they never hold.
    pub fn eval<M: MetadataProvider>( &self, active: &LoadOrder, metadata: &M ) -> Outcome {
        match self {
            Self::Name( pattern ) => Outcome::from_matches( pattern.matches( active )),
            Self::All( operands ) => {
                let outcomes = operands.into_iter().map(| expr | expr.eval( active, metadata )).collect_vec();
                Outcome {
                    holds: outcomes.iter().all(| outcome | outcome.holds ),
                    plugins: outcomes.into_iter().flat_map(| outcome | outcome.plugins ).unique().collect(),
                }
            },
            Self::Any( operands ) => {
                let outcomes = operands.into_iter()
                    .map(| expr | expr.eval( active, metadata ))
                    .filter(| outcome | outcome.holds )
                    .collect_vec();
                Outcome {
                    holds: !outcomes.is_empty(),
                    plugins: outcomes.into_iter().flat_map(| outcome | outcome.plugins ).unique().collect(),
                }
            },
            Self::Not( inner ) => Outcome { holds: !inner.eval( active, metadata ).holds, plugins: Vec::new() },
            Self::Desc { pattern, negated, plugin } => check( plugin, active, | id | metadata
                .description( id )
                .map_or( true, | text | pattern.is_match( &text ) != *negated )
            ),
            Self::Size { size, negated, plugin } => check( plugin, active, | id | metadata
                .file_size( id )
                .map_or( true, | actual | ( actual == *size ) != *negated )
            ),
            Self::Ver { op, version, plugin } => check( plugin, active, | id | metadata
                .version_strings( id )
                .and_then(| versions | versions.preferred().map(| actual | actual.cmp( version )))
                .map_or( true, | ordering | ordering == *op )
            ),
        }
    }

}

fn check( plugin: &NamePattern, active: &LoadOrder, predicate: impl Fn( &PluginId ) -> bool ) -> Outcome {
    Outcome::from_matches( plugin.matches( active ).into_iter().filter(| id | predicate( id )).collect() )
}

impl std::fmt::Display for Expr {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        let bang = | negated: bool | if negated { "!" } else { "" };
        match self {
            Self::Name( pattern ) => write!( f, "{}", pattern ),
            Self::All( operands ) => write!( f, "[ALL {}]", operands.into_iter().join( " " )),
            Self::Any( operands ) => write!( f, "[ANY {}]", operands.into_iter().join( " " )),
            Self::Not( inner ) => write!( f, "[NOT {}]", inner ),
            Self::Desc { pattern, negated, plugin } => write!( f, "[DESC {}/{}/ {}]", bang( *negated ), pattern.as_str(), plugin ),
            Self::Size { size, negated, plugin } => write!( f, "[SIZE {}{} {}]", bang( *negated ), size, plugin ),
            Self::Ver { op, version, plugin } => write!( f, "[VER {} {} {}]", match op {
                Ordering::Less => '<',
                Ordering::Equal => '=',
                Ordering::Greater => '>',
            }, version, plugin ),
        }
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {

    fn new( text: &'a str ) -> Self { Self { text, pos: 0 }}

    fn rest( &self ) -> &'a str { &self.text[self.pos..] }

    fn peek( &self ) -> Option<char> { self.rest().chars().next() }

    fn skip_whitespace( &mut self ) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Consumes `c` if it is the next non-whitespace character.
    fn eat( &mut self, c: char ) -> bool {
        self.skip_whitespace();
        let found = self.peek() == Some( c );
        if found { self.pos += c.len_utf8() }
        found
    }

    /// The run of letters directly at the cursor.
    fn keyword( &mut self ) -> &'a str {
        let rest = self.rest();
        let end = rest.find(| c: char | !c.is_ascii_alphabetic() ).unwrap_or( rest.len() );
        self.pos += end ;
        &rest[..end]
    }

    /// The next whitespace or bracket delimited word.
    fn word( &mut self ) -> &'a str {
        self.skip_whitespace();
        let rest = self.rest();
        let end = rest.find(| c: char | c.is_whitespace() || c == '[' || c == ']' ).unwrap_or( rest.len() );
        self.pos += end ;
        &rest[..end]
    }

    /// The shortest text ending in a plugin extension followed by whitespace,
    /// a bracket or the end of the line. Plugin names may contain spaces.
    fn plugin_name( &mut self ) -> Result<NamePattern, RuleError> {
        self.skip_whitespace();
        let rest = self.rest();
        let lower = rest.to_ascii_lowercase();
        let stop = rest.find([ '[', ']' ]).unwrap_or( rest.len() );
        let end = PLUGIN_EXTENSIONS.iter()
            .flat_map(| ext | lower[..stop].match_indices( *ext ).map( move |( index, _ )| index + ext.len() ))
            .filter(| &end | end == stop || lower[end..].starts_with( char::is_whitespace ))
            .min()
            .ok_or_else(|| RuleError::ExpectedPluginName( rest[..stop].trim().to_string() ))?;
        self.pos += end ;
        NamePattern::parse( &rest[..end] )
    }

    /// A `/regex/` literal, optionally preceded by `!`. `\/` escapes a slash.
    fn regex( &mut self ) -> Result<( bool, Regex ), RuleError> {
        let negated = self.eat( '!' );
        if !self.eat( '/' ) {
            return Err( RuleError::InvalidRegex( format!( "expected /pattern/, found '{}'", self.rest().trim() )))
        }
        let rest = self.rest();
        let close = rest.char_indices()
            .find(|&( index, c )| c == '/' && !rest[..index].ends_with( '\\' ))
            .map(|( index, _ )| index )
            .ok_or_else(|| RuleError::Unterminated( format!( "/{}", rest )))?;
        self.pos += close + 1 ;
        let regex = RegexBuilder::new( &rest[..close].replace( "\\/", "/" ))
            .case_insensitive( true )
            .build()
            .map_err(| err | RuleError::InvalidRegex( err.to_string() ))?;
        Ok(( negated, regex ))
    }

}

fn expression( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {

    if !cursor.eat( '[' ) { return cursor.plugin_name().map( Expr::Name ) }

    let start = cursor.pos - 1 ;
    let keyword = cursor.keyword();
    let parse = PREDICATES.iter()
        .find(|( name, _ )| name.eq_ignore_ascii_case( keyword ))
        .map(|( _, parse )| *parse )
        .ok_or_else(|| RuleError::UnknownPredicate( keyword.to_string() ))?;

    let expr = parse( cursor )?;
    match cursor.eat( ']' ) {
        true => Ok( expr ),
        false => Err( RuleError::Unterminated( cursor.text[start..].trim().to_string() )),
    }

}

fn operands( cursor: &mut Cursor<'_>, predicate: &'static str ) -> Result<NEVec<Expr>, RuleError> {
    let mut operands = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None | Some( ']' ) => break,
            Some( _ ) => operands.push( expression( cursor )? ),
        }
    }
    NEVec::try_from_vec( operands ).ok_or( RuleError::MissingOperand( predicate ))
}

fn parse_all( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    operands( cursor, "ALL" ).map( Expr::All )
}

fn parse_any( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    operands( cursor, "ANY" ).map( Expr::Any )
}

fn parse_not( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    cursor.skip_whitespace();
    match cursor.peek() {
        None | Some( ']' ) => Err( RuleError::MissingOperand( "NOT" )),
        Some( _ ) => expression( cursor ).map(| inner | Expr::Not( Box::new( inner ))),
    }
}

fn parse_desc( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    let ( negated, pattern ) = cursor.regex()?;
    let plugin = cursor.plugin_name()?;
    Ok( Expr::Desc { pattern, negated, plugin })
}

fn parse_size( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    let negated = cursor.eat( '!' );
    let word = cursor.word();
    let size = word.parse::<u64>().map_err(| _ | RuleError::InvalidSize( word.to_string() ))?;
    let plugin = cursor.plugin_name()?;
    Ok( Expr::Size { size, negated, plugin })
}

fn parse_ver( cursor: &mut Cursor<'_> ) -> Result<Expr, RuleError> {
    cursor.skip_whitespace();
    let op = match cursor.peek() {
        Some( '<' ) => Ordering::Less,
        Some( '=' ) => Ordering::Equal,
        Some( '>' ) => Ordering::Greater,
        _ => return Err( RuleError::InvalidOperator( cursor.word().to_string() )),
    };
    cursor.pos += 1 ;
    let version = Version::parse( cursor.word() )?;
    let plugin = cursor.plugin_name()?;
    Ok( Expr::Ver { op, version, plugin })
}

use itertools::Itertools ;
use tracing::debug ;

use crate::{ Hint, HintMap, LoadOrder, Location, Message, MetadataProvider, OrderEdge, Placement, PluginId };
use crate::utils::{ Merge, PartialSuccess };
use super::{ Expr, NamePattern, Section };
use super::directive::Directive ;
use super::lexer ;



/// Everything one rule source contributes to a resolution.
#[derive( Clone, Debug, Default, PartialEq, Eq )]
pub struct CompiledRules {
    /// Ordering edges between active plugins, in rule order.
    pub edges: Vec<OrderEdge>,
    /// Placement tags of active plugins, in rule order. A plugin tagged toward
    /// both ends appears once per end; the first entry wins.
    pub placements: Vec<( PluginId, Placement )>,
    pub hints: HintMap,
    /// `false` if any line of the source failed to parse.
    pub ok: bool,
}

/// Compiles rule sources against one active plugin set.
///
/// Rules only ever produce constraints between active plugins: a rule naming
/// a plugin that isn't active contributes nothing.
///
/// ```
/// use plugin_order::{ LoadOrder, NoMetadata, PluginId, RuleCompiler };
///
/// let active = LoadOrder::from_ids([ "a.esp", "b.esp" ].map( PluginId::new ));
/// let compiler = RuleCompiler::new( &active, &NoMetadata );
/// let ( rules, messages ) = compiler.compile( "rules.txt", "[Order]\nB.esp\nmissing.esp\nA.esp\n" );
///
/// assert!( rules.ok && messages.is_empty() );
/// assert_eq!( rules.edges.len(), 1 );
/// assert_eq!( rules.edges[0].to_string(), "b.esp -> a.esp" );
/// assert_eq!( rules.edges[0].description, "rules.txt:4 [Order]" );
/// ```
#[derive( Debug )]
pub struct RuleCompiler<'a, M> {
    active: &'a LoadOrder,
    metadata: &'a M,
}

impl<'a, M: MetadataProvider> RuleCompiler<'a, M> {

    pub fn new( active: &'a LoadOrder, metadata: &'a M ) -> Self {
        Self { active, metadata }
    }

    /// Compiles the rule text of `source`.
    ///
    /// Never fails: malformed lines are reported as located error messages,
    /// skipped, and clear [`CompiledRules::ok`]. Conflict, requirement and
    /// patch findings are reported as warnings and notes.
    pub fn compile( &self, source: &str, text: &str ) -> PartialSuccess<CompiledRules, Message> {

        let ( blocks, lex_errors ) = lexer::blocks( text );
        let ( directives, errors ) = blocks.into_iter()
            .fold(( Vec::new(), lex_errors ), |( directives, errors ), block | {
                let ( directive, block_errors ) = Directive::from_block( block );
                ( directives.merge_all( directive ), errors.merge_all( block_errors ))
            });

        let messages = errors.into_iter()
            .sorted_by_key(|( line, _ )| *line )
            .map(|( line, err )| Message::error( err.to_string() ).at( Location::new( source, line )))
            .collect_vec();

        let rules = CompiledRules { ok: messages.is_empty(), ..CompiledRules::default() };
        let ( rules, messages ) = directives.iter()
            .fold(( rules, messages ), |( rules, messages ), directive | self.apply( source, directive, rules, messages ));

        debug!(
            source,
            edges = rules.edges.len(),
            placements = rules.placements.len(),
            hints = rules.hints.len(),
            ok = rules.ok,
            "compiled rule source",
        );
        ( rules, messages )

    }

    fn apply( &self, source: &str, directive: &Directive, mut rules: CompiledRules, mut messages: Vec<Message> ) -> PartialSuccess<CompiledRules, Message> {
        match directive {

            Directive::Order( names ) => {
                let mut previous: Option<PluginId> = None ;
                for ( line, name ) in names {
                    for id in name.matches( self.active ) {
                        if let Some( before ) = previous.replace( id.clone() ).filter(| before | *before != id ) {
                            let description = format!( "{} [{}]", Location::new( source, *line ), Section::Order );
                            rules.edges.push( OrderEdge::new( description, before, id ));
                        }
                    }
                }
            },

            Directive::NearStart( names ) => tag( &mut rules, names, self.active, Placement::NearStart ),

            Directive::NearEnd( names ) => tag( &mut rules, names, self.active, Placement::NearEnd ),

            Directive::Conflict { line, message, expressions } => {
                let matched = expressions.iter()
                    .map(| expr | expr.eval( self.active, self.metadata ))
                    .filter(| outcome | outcome.holds )
                    .collect_vec();
                if matched.len() >= 2 {
                    let plugins = matched.into_iter().flat_map(| outcome | outcome.plugins ).unique().collect_vec();
                    messages.push( Message::warning( report( Section::Conflict, plugins.iter().join( ", " ), message ))
                        .at( Location::new( source, *line )));
                    rules.hints.extend( plugins.into_iter().map(| id | ( id, Hint::Conflict )));
                }
            },

            Directive::Note { line, message, expressions } => {
                let plugins = expressions.iter()
                    .map(| expr | expr.eval( self.active, self.metadata ))
                    .filter(| outcome | outcome.holds )
                    .collect_vec();
                if !plugins.is_empty() {
                    let subject = plugins.into_iter().flat_map(| outcome | outcome.plugins ).unique().join( ", " );
                    messages.push( Message::info( report( Section::Note, subject, message ))
                        .at( Location::new( source, *line )));
                }
            },

            Directive::Requires { line, message, dependent, requirement } => {
                let dependent_outcome = dependent.eval( self.active, self.metadata );
                if dependent_outcome.holds && !requirement.eval( self.active, self.metadata ).holds {
                    let subject = format!( "{} requires {}", culprits( &dependent_outcome.plugins, dependent ), requirement );
                    messages.push( Message::warning( report( Section::Requires, subject, message ))
                        .at( Location::new( source, *line )));
                    rules.hints.extend( dependent_outcome.plugins.into_iter().map(| id | ( id, Hint::Requires )));
                }
            },

            Directive::Patch { line, message, patch, master } => {
                let patch_outcome = patch.eval( self.active, self.metadata );
                let master_outcome = master.eval( self.active, self.metadata );
                match ( patch_outcome.holds, master_outcome.holds ) {
                    ( true, false ) => {
                        let subject = format!( "{} is a patch for missing {}", culprits( &patch_outcome.plugins, patch ), master );
                        messages.push( Message::warning( report( Section::Patch, subject, message ))
                            .at( Location::new( source, *line )));
                        rules.hints.extend( patch_outcome.plugins.into_iter().map(| id | ( id, Hint::Patch )));
                    },
                    ( false, true ) => {
                        let subject = format!( "A patch is available for {}: {}", culprits( &master_outcome.plugins, master ), patch );
                        messages.push( Message::info( report( Section::Patch, subject, message ))
                            .at( Location::new( source, *line )));
                    },
                    _ => {},
                }
            },

        }
        ( rules, messages )
    }

}

fn tag( rules: &mut CompiledRules, names: &[NamePattern], active: &LoadOrder, placement: Placement ) {
    for id in names.iter().flat_map(| name | name.matches( active )) {
        let entry = ( id, placement );
        if !rules.placements.contains( &entry ) { rules.placements.push( entry ) }
    }
}

/// Names the plugins that made `expr` true, or the expression itself when
/// no single plugin did.
fn culprits( plugins: &[PluginId], expr: &Expr ) -> String {
    match plugins.is_empty() {
        true => expr.to_string(),
        false => plugins.iter().join( ", " ),
    }
}

fn report( section: Section, subject: String, message: &str ) -> String {
    match message.is_empty() {
        true => format!( "[{}] {}", section, subject ),
        false => format!( "[{}] {}\n  {}", section, subject, message.lines().join( "\n  " )),
    }
}

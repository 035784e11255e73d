use plugin_order::{ Location, NoMetadata, RuleCompiler, RuleError, Severity, Expr };

#[test]
fn malformed_lines_are_skipped_and_reported() {

    let active = snapshot![ "a.esp", "b.esp", "c.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "user.txt", "\
[Order]
a.esp
not a plugin
b.esp
[Bogus]
whatever.esp
[Order]
[ALL c.esp]
c.esp
a.esp
" );

    assert!( !rules.ok );

    let errors = messages.iter()
        .map(| message | ( message.severity, message.location.clone(), message.text.as_str() ))
        .collect::<Vec<_>>();
    assert_eq!( errors, vec![
        ( Severity::Error, Some( Location::new( "user.txt", 3 )), "Expected a plugin name, found 'not a plugin'" ),
        ( Severity::Error, Some( Location::new( "user.txt", 5 )), "Unknown section: [Bogus]" ),
        ( Severity::Error, Some( Location::new( "user.txt", 8 )), "Predicates are not allowed in [Order] sections" ),
    ]);

    let edges = rules.edges.iter().map( ToString::to_string ).collect::<Vec<_>>();
    assert_eq!( edges, vec![ "a.esp -> b.esp", "c.esp -> a.esp" ]);

}

#[test]
fn malformed_pairs_are_dropped() {

    let active = snapshot![ "a.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "user.txt", "[Requires]\na.esp\n" );

    assert!( !rules.ok );
    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].text, "[Requires] expects 2 expressions, found 1" );

}

#[test]
fn malformed_expressions() {

    let error = | text: &str | Expr::parse( text ).unwrap_err();

    assert_eq!( error( "[ALL]" ), RuleError::MissingOperand( "ALL" ));
    assert_eq!( error( "[NOT ]" ), RuleError::MissingOperand( "NOT" ));
    assert_eq!( error( "[ANY a.esp" ), RuleError::Unterminated( "[ANY a.esp".into() ));
    assert_eq!( error( "[FOO a.esp]" ), RuleError::UnknownPredicate( "FOO".into() ));
    assert_eq!( error( "[SIZE big a.esp]" ), RuleError::InvalidSize( "big".into() ));
    assert_eq!( error( "[VER ~ 1.0 a.esp]" ), RuleError::InvalidOperator( "~".into() ));
    assert_eq!( error( "a.esp b.esp" ), RuleError::TrailingInput( "b.esp".into() ));
    assert!( matches!( error( "[VER < x a.esp]" ), RuleError::InvalidVersion( _ )));
    assert!( matches!( error( "[DESC /(/ a.esp]" ), RuleError::InvalidRegex( _ )));

}

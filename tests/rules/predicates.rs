use plugin_order::{ Expr, NoMetadata, PluginId, StaticMetadata };

#[test]
fn predicates_evaluate_against_metadata() {

    let active = snapshot![ "big.esp", "versioned.esp", "described.esp" ];
    let metadata = StaticMetadata::new()
        .with_size( "big.esp", 2048 )
        .with_description( "versioned.esp", "Adds hats. Version: 1.5" )
        .with_description( "described.esp", "Requires Tribunal" );

    let holds = | text: &str | Expr::parse( text ).unwrap().eval( &active, &metadata ).holds ;

    assert!( holds( "[SIZE 2048 big.esp]" ));
    assert!( !holds( "[SIZE 1 big.esp]" ));
    assert!( holds( "[SIZE !1 big.esp]" ));

    assert!( holds( "[VER = 1.5 versioned.esp]" ));
    assert!( holds( "[VER < 2.0 versioned.esp]" ));
    assert!( !holds( "[VER > 1.5.0 versioned.esp]" ));

    assert!( holds( "[DESC /tribunal/ described.esp]" ));
    assert!( !holds( "[DESC !/tribunal/ described.esp]" ));

    assert!( holds( "[ALL big.esp [NOT missing.esp]]" ));
    assert!( !holds( "[ALL big.esp missing.esp]" ));
    assert!( holds( "[ANY missing.esp big.esp]" ));
    assert!( holds( "[ANY [NOT missing.esp]]" ));

}

#[test]
fn predicates_hold_when_metadata_is_unknown() {

    let active = snapshot![ "mod.esp" ];
    let holds = | text: &str | Expr::parse( text ).unwrap().eval( &active, &NoMetadata ).holds ;

    assert!( holds( "[SIZE 123 mod.esp]" ));
    assert!( holds( "[VER > 9.9 mod.esp]" ));
    assert!( holds( "[DESC /anything/ mod.esp]" ));

    // but never for plugins that are not active
    assert!( !holds( "[SIZE 123 other.esp]" ));
    assert!( !holds( "[VER > 9.9 other.esp]" ));

}

#[test]
fn predicates_report_matching_plugins() {

    let active = snapshot![ "a.esp", "b.esp" ];
    let outcome = Expr::parse( "[ALL a.esp [ANY b.esp c.esp] [NOT d.esp]]" ).unwrap().eval( &active, &NoMetadata );

    assert!( outcome.holds );
    assert_eq!( outcome.plugins, vec![ PluginId::new( "a.esp" ), PluginId::new( "b.esp" )]);

}

#[test]
fn predicates_span_lines_in_rule_files() {

    let active = snapshot![ "a.esp", "b.esp" ];
    let ( _, messages ) = plugin_order::RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", "\
[Note] Both installed.
[ALL a.esp
     b.esp]
" );

    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].text, "[Note] a.esp, b.esp\n  Both installed." );

}

use plugin_order::{ Hint, NoMetadata, PluginId, RuleCompiler, Severity };

const RULES: &str = "\
[Patch]
  Fixes the hats.
Hat Patch.esp
Hats.esp
" ;

#[test]
fn patch_warns_about_missing_master() {

    let active = snapshot![ "hat patch.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", RULES );

    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].severity, Severity::Warning );
    assert_eq!( messages[0].text, "[Patch] hat patch.esp is a patch for missing hats.esp\n  Fixes the hats." );
    assert_eq!( rules.hints.get( &PluginId::new( "hat patch.esp" )), Some( &Hint::Patch ));

}

#[test]
fn patch_notes_available_patch() {

    let active = snapshot![ "hats.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", RULES );

    assert_eq!( messages.len(), 1 );
    assert_eq!( messages[0].severity, Severity::Info );
    assert!( messages[0].text.starts_with( "[Patch] A patch is available for hats.esp: hat patch.esp" ));
    assert!( rules.hints.is_empty() );

}

#[test]
fn patch_is_silent_when_both_present() {

    let active = snapshot![ "hats.esp", "hat patch.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", RULES );

    assert!( messages.is_empty() );
    assert!( rules.hints.is_empty() );

}

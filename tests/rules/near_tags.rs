use plugin_order::{ NoMetadata, Placement, PluginId, RuleCompiler };

#[test]
fn near_tags_collect_present_matches() {

    let active = snapshot![ "first.esp", "last a.esp", "last b.esp" ];
    let ( rules, messages ) = RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", "\
[NearStart]
First.esp
absent.esp

[NearEnd]
last *.esp
Last A.esp
" );

    assert_no_warnings!( messages );
    assert_eq!( rules.placements, vec![
        ( PluginId::new( "first.esp" ), Placement::NearStart ),
        ( PluginId::new( "last a.esp" ), Placement::NearEnd ),
        ( PluginId::new( "last b.esp" ), Placement::NearEnd ),
    ]);
    assert!( rules.edges.is_empty() );

}

#[test]
fn near_tags_keep_rule_order_across_sections() {

    let active = snapshot![ "m.esp" ];
    let ( rules, _ ) = RuleCompiler::new( &active, &NoMetadata ).compile( "base.txt", "\
[NearEnd]
m.esp

[NearStart]
m.esp
" );

    assert_eq!( rules.placements, vec![
        ( PluginId::new( "m.esp" ), Placement::NearEnd ),
        ( PluginId::new( "m.esp" ), Placement::NearStart ),
    ]);

}

use plugin_order::{ GameProfile, NoMetadata, Resolver, ResolverConfig, RuleSource };

#[test]
fn game_masters_are_chained_ahead_of_other_masters() {

    let snapshot = snapshot![ "mod.esp", "extra.esm", "Bloodmoon.esm", "Tribunal.esm", "Morrowind.esm" ];
    let config = ResolverConfig { game: Some( GameProfile::Morrowind ), ..ResolverConfig::default() };
    let base = RuleSource::mandatory( "mlox_base.txt", "" );

    let resolver = Resolver::new( config, NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_no_warnings!( messages );
    assert_eq!( resolution.order(), ids![ "morrowind.esm", "tribunal.esm", "bloodmoon.esm", "extra.esm", "mod.esp" ]);

}

use plugin_order::{ NoMetadata, Resolver, ResolverConfig, RuleSource, exit_status };

#[test]
fn stability_without_rules_keeps_current_order() {

    let snapshot = snapshot![ "x.esp", "y.esp", "z.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_eq!( resolution.order(), ids![ "x.esp", "y.esp", "z.esp" ]);
    assert!( resolution.is_sorted() );
    assert_eq!( exit_status( &messages ), 0 );

}

#[test]
fn stability_unrelated_plugins_keep_relative_order() {

    let snapshot = snapshot![ "p1.esp", "late.esp", "p2.esp", "early.esp", "p3.esp" ];
    let base = RuleSource::mandatory( "mlox_base.txt", "[Order]\nearly.esp\nlate.esp\n" );

    let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
    let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();

    assert_no_warnings!( messages );
    let order = resolution.order();
    let position = | name: &str | order.iter().position(| id | id.as_str() == name ).unwrap();
    assert!( position( "early.esp" ) < position( "late.esp" ));
    assert!( position( "p1.esp" ) < position( "p2.esp" ));
    assert!( position( "p2.esp" ) < position( "p3.esp" ));

}

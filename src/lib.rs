//! Compiles community load-order rules into a safe, stable plugin load order.
//!
//! Games like Morrowind load their content plugins in a user-controlled order,
//! and a bad order breaks things. `plugin_order` merges the partial-order rules
//! of several rule files into one consistent total order, never introduces a
//! dependency cycle, keeps unrelated plugins in their previous relative
//! position, and explains its result.
//!
//! # Core Concepts
//!
//! - [`PluginId`]: Case-insensitive identity of a plugin file. Everything keys on it.
//!
//! - [`LoadOrder`]: The player's current order of active plugins, the input of a
//! 	resolution and the set rules are instantiated against.
//!
//! - [`RuleCompiler`]: Turns the text of one rule file into ordering edges, near-start
//! 	and near-end tags, and [`Hint`]s, see [`rules`] for the language. Conditional
//! 	predicates ask a [`MetadataProvider`] about file sizes, descriptions and versions.
//!
//! - [`OrderGraph`]: Directed graph of "loads before" constraints that rejects any
//! 	edge closing a cycle at insertion time, and linearizes deterministically.
//!
//! - [`Resolver`]: Compiles the rule sources in precedence order into one graph, adds
//! 	the current order as soft tie-breaking constraints, and returns a [`Resolution`].
//!
//! - [`Message`]: Everything the user should hear about, tagged with a [`Severity`].
//! 	[`exit_status`] classifies a message stream the way command line front ends report it.
//!
//! # Example
//!
//! ```
//! use plugin_order::{ LoadOrder, NoMetadata, PluginId, Resolver, ResolverConfig, RuleSource, exit_status };
//!
//! let ( snapshot, duplicates ) = LoadOrder::from_names([
//! 	"Morrowind.esm", "Patch for Foo.esp", "Foo.esp", "Bar.esp",
//! ]);
//! assert!( duplicates.is_empty() );
//!
//! let base = RuleSource::mandatory( "mlox_base.txt", "
//! [Order]
//! Foo.esp
//! Patch for Foo.esp
//!
//! [NearEnd]
//! Bar.esp
//!
//! [Conflict] Both replace the same textures.
//! Foo.esp
//! Bar.esp
//! " );
//!
//! let resolver = Resolver::new( ResolverConfig::default(), NoMetadata );
//! let ( resolution, messages ) = resolver.resolve( &snapshot, &[ base ]).unwrap();
//!
//! assert_eq!( resolution.order(), [ "morrowind.esm", "foo.esp", "patch for foo.esp", "bar.esp" ].map( PluginId::new ));
//! assert_eq!( exit_status( &messages ), 2 );
//!
//! for line in resolution.annotated() { println!( "{}", line ); }
//! println!( "{}", resolution.explain( &PluginId::new( "patch for foo.esp" )));
//! ```

mod plugin_id ;
mod load_order ;
mod message ;
mod hint ;
mod version ;
mod metadata ;
mod graph ;
pub mod rules ;
mod config ;
mod resolver ;
mod utils ;

pub use plugin_id::{ PluginId, MASTER_EXTENSIONS, PLUGIN_EXTENSIONS };
pub use load_order::LoadOrder ;
pub use message::{ Message, Severity, Location, render, exit_status };
pub use hint::{ Hint, HintMap };
pub use version::{ Version, InvalidVersion, VERSION_PATTERN };
pub use metadata::{ MetadataProvider, NoMetadata, StaticMetadata, PluginVersions };
pub use graph::{ OrderGraph, OrderEdge, Placement };
pub use rules::{ RuleCompiler, CompiledRules, RuleError, Expr, NamePattern, Outcome, Section };
pub use config::{ ResolverConfig, GameProfile, ConfigError };
pub use resolver::{ Resolver, Resolution, AnnotatedPlugin, RuleSource, ResolveError };
pub use utils::{ PartialSuccess, PartialResult, Merge, dedupe_caseless };

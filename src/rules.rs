//! The rule language compiler.
//!
//! A rule source is a sequence of section blocks:
//!
//! ```text
//! ; comments start with a semicolon
//! [Order]
//! Morrowind.esm
//! Better Bodies <VER>.esp
//! BB_Clothing.esp
//!
//! [Conflict] These two replace the same meshes.
//! Better Heads.esp
//! [ANY Other Heads.esp Yet More Heads.esp]
//!
//! [Requires]
//! BB_Clothing.esp
//! [VER > 2.0 Better Bodies <VER>.esp]
//! ```
//!
//! [`Section`] lists the recognised headers. Each non-indented line of a block
//! is an [`Expr`]; indented lines of message-bearing sections are the text
//! reported to the user. The [`RuleCompiler`] turns a source into
//! [`CompiledRules`] for one active plugin set.

mod rule_error ;
mod expr ;
mod lexer ;
mod directive ;
mod compile ;

pub use rule_error::RuleError ;
pub use expr::{ Expr, NamePattern, Outcome };
pub use directive::Section ;
pub use compile::{ RuleCompiler, CompiledRules };

mod partial_success ;
mod merge ;
mod dedupe_caseless ;

pub use partial_success::{ PartialSuccess, PartialResult };
pub use merge::Merge ;
pub use dedupe_caseless::dedupe_caseless ;

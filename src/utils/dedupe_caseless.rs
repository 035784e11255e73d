use std::collections::HashSet ;



/// Splits `names` into caselessly unique entries and the duplicates that were dropped.
///
/// Names are compared the way [`PluginId`]( crate::PluginId ) compares them,
/// ignoring case and surrounding whitespace. The first spelling of a name wins
/// and keeps its position; every later occurrence lands in the second list, in
/// input order.
///
/// ```
/// use plugin_order::dedupe_caseless ;
///
/// let ( unique, duplicates ) = dedupe_caseless([ "Test.esp", "other.esp", "TEST.esp" ]);
/// assert_eq!( unique, vec![ "Test.esp", "other.esp" ]);
/// assert_eq!( duplicates, vec![ "TEST.esp" ]);
/// ```
pub fn dedupe_caseless<S: AsRef<str>>( names: impl IntoIterator<Item = S> ) -> ( Vec<S>, Vec<S> ) {
    let mut seen = HashSet::new();
    names.into_iter().partition(| name | seen.insert( name.as_ref().trim().to_lowercase() ))
}

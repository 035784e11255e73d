/// Chainable accumulation for owned collections.
///
/// Lets folds thread a vector through without a separate `extend` statement.
pub trait Merge<T> {
    /// Appends every item of `items`.
    fn merge_all( self, items: impl IntoIterator<Item = T> ) -> Self ;
}

impl<T> Merge<T> for Vec<T> {

    #[inline] fn merge_all( mut self, items: impl IntoIterator<Item = T> ) -> Self {
        self.extend( items );
        self
    }

}

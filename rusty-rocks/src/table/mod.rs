pub mod sample;
pub use sample::*;
pub mod dataset;
pub use dataset::*;

/// Type Key is queryable from Self
pub trait Queryable<Key> {
    /// Find the index of Key in Self
    fn find_index(&self, key: &Key) -> Option<usize>;
    /// Find many indecies of Key in Self
    fn find_many_indexes(&self, keys: &[Key]) -> Vec<Option<usize>> {
        keys.iter().map(|x| self.find_index(x)).collect()
    }
}

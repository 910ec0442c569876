pub mod table;
pub use table::*;

pub mod error;
pub use error::*;

pub mod filter;
pub use filter::*;

pub mod map;
pub use map::*;

pub mod markers;
pub use markers::*;

pub mod view;
pub use view::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[inline]
pub(crate) fn default<T: Default>() -> T {
    T::default()
}

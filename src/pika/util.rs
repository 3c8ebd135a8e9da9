//! Miscellaneous utility functionality.
//!
//! Specifically, nothing in here is Pika-related, even though
//! it might be useful outside of this crate.
use macro_pub::macro_pub;

/// Creates a simple HashMap from the given key-value expressions.
///
/// The map is built in one go from an array of pairs, so the
/// usual "mut map, insert, insert, ..." dance is not needed at
/// the use site or in the expansion.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {
        HashMap::from([
            $(($key, $value)),*
        ])
    }
}

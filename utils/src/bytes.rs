//! Types for byte-oriented data.
//!
//! - [ByteView]: a borrowed, read-only window over bytes.
//! - [LimitedBytes] / [ByteVec]: an owned byte buffer, optionally bounded in length.
//! - [ByteArr]: a fixed-size byte array (see also [blob_type](crate::blob_type)).
//! - [ByteVecOrView]: either of the first two, copying on first mutable access.

use core::cmp::Ordering;

pub mod arr;
pub use arr::{ByteArr, Error as ByteArrError};
pub mod or_view;
pub use or_view::ByteVecOrView;
pub mod vec;
pub use vec::{ByteVec, LimitedBytes};
pub mod view;
pub use view::ByteView;

/// Orders byte strings by length first and by content second.
///
/// Unlike the lexicographic order of slices, a shorter input always sorts first.
pub fn cmp_len_first(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_len_first() {
        // Test case 0: equal
        assert_eq!(cmp_len_first(b"abc", b"abc"), Ordering::Equal);

        // Test case 1: shorter sorts first regardless of content
        assert_eq!(cmp_len_first(b"z", b"aa"), Ordering::Less);
        assert_eq!(b"z".as_slice().cmp(b"aa".as_slice()), Ordering::Greater);

        // Test case 2: same length falls back to content
        assert_eq!(cmp_len_first(b"ab", b"aa"), Ordering::Greater);

        // Test case 3: empty
        assert_eq!(cmp_len_first(b"", b"a"), Ordering::Less);
    }
}

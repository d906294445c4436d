use crate::hex::{hex, Hex};
use core::{fmt, ops::Deref};

/// A borrowed, read-only view over bytes.
///
/// Views compare lexicographically and display through [Hex] (so `{}` abbreviates long views,
/// `{:#}` adds a `0x` prefix and `{:x}` prints every byte).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteView<'a>(&'a [u8]);

impl<'a> ByteView<'a> {
    /// Creates a view over `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// Returns the viewed bytes with the view's lifetime.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Shrinks the view by `count` bytes at the front.
    ///
    /// # Panics
    ///
    /// Panics if `count > len`.
    pub fn drop_first(&mut self, count: usize) {
        let len = self.0.len();
        assert!(count <= len, "cannot drop {count} bytes from a view of {len}");
        self.0 = &self.0[count..];
    }

    /// Shrinks the view by `count` bytes at the back.
    ///
    /// # Panics
    ///
    /// Panics if `count > len`.
    pub fn drop_last(&mut self, count: usize) {
        let len = self.0.len();
        assert!(count <= len, "cannot drop {count} bytes from a view of {len}");
        self.0 = &self.0[..len - count];
    }

    /// Returns a view over `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn subview(&self, offset: usize, len: usize) -> ByteView<'a> {
        Self(&self.0[offset..offset + len])
    }

    /// Returns the full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex(self.0)
    }

    /// Interprets the bytes as UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.0).ok()
    }
}

impl Deref for ByteView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.0
    }
}

impl AsRef<[u8]> for ByteView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ByteView<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(s: &'a str) -> Self {
        Self(s.as_bytes())
    }
}

impl PartialEq<[u8]> for ByteView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteView<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteView({:#x})", Hex::new(self.0))
    }
}

impl fmt::Display for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Hex::new(self.0), f)
    }
}

impl fmt::LowerHex for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&Hex::new(self.0), f)
    }
}

impl fmt::UpperHex for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&Hex::new(self.0), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let v = ByteView::default();
        assert!(v.is_empty());
        assert_eq!(v.to_hex(), "");
        assert_eq!(v.to_string(), "<empty>");
    }

    #[test]
    fn test_from_sources() {
        let expected = "010203313233";

        // Test case 0: array
        let arr = [1, 2, 3, b'1', b'2', b'3'];
        let v = ByteView::from(&arr);
        assert_eq!(v.to_hex(), expected);
        assert_eq!(v.len(), arr.len());

        // Test case 1: vector
        let vec = arr.to_vec();
        let v = ByteView::from(&vec);
        assert_eq!(v.to_hex(), expected);

        // Test case 2: slice
        let v = ByteView::new(&arr[..]);
        assert_eq!(v.to_hex(), expected);

        // Test case 3: copy of a view
        let w = v;
        assert_eq!(w, v);
        assert_eq!(w.to_hex(), expected);
    }

    #[test]
    fn test_drop() {
        let data = [1, 2, 3, 4, 5];
        let mut v = ByteView::new(&data);
        v.drop_first(1);
        assert_eq!(v, [2, 3, 4, 5]);
        v.drop_last(2);
        assert_eq!(v, [2, 3]);
        v.drop_first(2);
        assert!(v.is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot drop 2 bytes from a view of 1")]
    fn test_drop_last_too_many() {
        let mut v = ByteView::new(&[1]);
        v.drop_last(2);
    }

    #[test]
    #[should_panic(expected = "cannot drop 3 bytes from a view of 1")]
    fn test_drop_first_too_many() {
        let mut v = ByteView::new(&[1]);
        v.drop_first(3);
    }

    #[test]
    fn test_subview_and_str() {
        let v = ByteView::from("hello world");
        assert_eq!(v.subview(6, 5).as_str(), Some("world"));
        assert!(v.starts_with(b"hello"));
        assert_eq!(ByteView::new(&[0xff]).as_str(), None);
    }

    #[test]
    fn test_ordering() {
        let a = ByteView::new(&[1, 2]);
        let b = ByteView::new(&[1, 2, 0]);
        let c = ByteView::new(&[2]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_format() {
        let data = [0x01, 0x02, 0x03, 0x0a, 0x0b, 0x0c];
        let v = ByteView::new(&data);
        assert_eq!(format!("{:#}", v), "0x0102…0b0c");
        assert_eq!(format!("{}", v), "0102…0b0c");
        assert_eq!(format!("{:x}", v), "0102030a0b0c");
        assert_eq!(format!("{:X}", v), "0102030A0B0C");
        assert_eq!(format!("{:?}", v), "ByteView(0x0102030a0b0c)");
        assert_eq!(format!("[{:>12}]", v), "[   0102…0b0c]");
        assert_eq!(format!("[{:<4x}]", ByteView::new(&[0xff])), "[ff  ]");
    }
}

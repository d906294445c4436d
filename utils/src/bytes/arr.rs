//! Fixed-size byte arrays.

use crate::hex::{hex, unhex_into, Hex, UnhexError};
use core::{
    fmt,
    ops::{Deref, DerefMut},
};
use thiserror::Error;

/// Errors returned by [ByteArr] constructors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex: {0}")]
    Hex(#[from] UnhexError),
}

/// An array of exactly `N` bytes, zeroed by default.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ByteArr<const N: usize>([u8; N]);

impl<const N: usize> ByteArr<N> {
    /// The number of bytes.
    pub const SIZE: usize = N;

    /// Wraps an array of length `N`.
    pub const fn new(value: [u8; N]) -> Self {
        Self(value)
    }

    /// Copies a slice that must be exactly `N` bytes long.
    pub fn from_slice(value: &[u8]) -> Result<Self, Error> {
        let array: [u8; N] = value.try_into().map_err(|_| Error::InvalidLength {
            expected: N,
            actual: value.len(),
        })?;
        Ok(Self(array))
    }

    /// Copies the UTF-8 bytes of `s`, which must be exactly `N` bytes long.
    pub fn from_str_bytes(s: &str) -> Result<Self, Error> {
        Self::from_slice(s.as_bytes())
    }

    /// Decodes unprefixed hex of exactly `2 * N` digits.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let mut out = [0u8; N];
        unhex_into(&mut out, s)?;
        Ok(Self(out))
    }

    /// Decodes `0x`-prefixed hex of exactly `2 * N` digits.
    pub fn from_hex_with_prefix(s: &str) -> Result<Self, Error> {
        let digits = s.strip_prefix("0x").ok_or(UnhexError::RequiredPrefix)?;
        Self::from_hex(digits)
    }

    /// Returns the full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex(&self.0)
    }

    /// Interprets the bytes as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Returns the underlying array.
    pub const fn into_array(self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> Default for ByteArr<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<[u8; N]> for ByteArr<N> {
    fn from(value: [u8; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<ByteArr<N>> for [u8; N] {
    fn from(value: ByteArr<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteArr<N> {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl<const N: usize> TryFrom<&Vec<u8>> for ByteArr<N> {
    type Error = Error;

    fn try_from(value: &Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl<const N: usize> TryFrom<Vec<u8>> for ByteArr<N> {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_slice(&value)
    }
}

impl<const N: usize> AsRef<[u8]> for ByteArr<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> AsMut<[u8]> for ByteArr<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> Deref for ByteArr<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> DerefMut for ByteArr<N> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteArr<N> {
    fn eq(&self, other: &[u8; N]) -> bool {
        &self.0 == other
    }
}

impl<const N: usize> PartialEq<[u8]> for ByteArr<N> {
    fn eq(&self, other: &[u8]) -> bool {
        self.0.as_slice() == other
    }
}

impl<const N: usize> fmt::Debug for ByteArr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteArr<{N}>({:#x})", Hex::new(&self.0))
    }
}

impl<const N: usize> fmt::Display for ByteArr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Hex::new(&self.0), f)
    }
}

impl<const N: usize> fmt::LowerHex for ByteArr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&Hex::new(&self.0), f)
    }
}

impl<const N: usize> fmt::UpperHex for ByteArr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&Hex::new(&self.0), f)
    }
}

/// Declares a newtype over [ByteArr](crate::ByteArr) so that blobs of the same size but
/// different meaning cannot be mixed up.
///
/// The generated type has the constructors of [ByteArr](crate::ByteArr) (`new`, `from_slice`,
/// `from_str_bytes`, `from_hex`, `from_hex_with_prefix`), dereferences to `[u8]`, and formats
/// its bytes as hex.
///
/// ```
/// qtils::blob_type!(Hash32, 32);
///
/// let hash = Hash32::from_hex(&"ab".repeat(32)).unwrap();
/// assert_eq!(hash.len(), 32);
/// assert_eq!(hash.to_string(), "abab…abab");
/// ```
#[macro_export]
macro_rules! blob_type {
    ($(#[$meta:meta])* $vis:vis $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name($crate::ByteArr<{ $size }>);

        impl $name {
            /// The number of bytes.
            pub const SIZE: usize = $size;

            /// Wraps an array of the blob's size.
            pub const fn new(value: [u8; $size]) -> Self {
                Self($crate::ByteArr::new(value))
            }

            /// Copies a slice of exactly the blob's size.
            pub fn from_slice(value: &[u8]) -> ::core::result::Result<Self, $crate::ByteArrError> {
                $crate::ByteArr::from_slice(value).map(Self)
            }

            /// Copies the UTF-8 bytes of `s`, which must match the blob's size.
            pub fn from_str_bytes(s: &str) -> ::core::result::Result<Self, $crate::ByteArrError> {
                $crate::ByteArr::from_str_bytes(s).map(Self)
            }

            /// Decodes unprefixed hex.
            pub fn from_hex(s: &str) -> ::core::result::Result<Self, $crate::ByteArrError> {
                $crate::ByteArr::from_hex(s).map(Self)
            }

            /// Decodes `0x`-prefixed hex.
            pub fn from_hex_with_prefix(s: &str) -> ::core::result::Result<Self, $crate::ByteArrError> {
                $crate::ByteArr::from_hex_with_prefix(s).map(Self)
            }

            /// Returns the wrapped array.
            pub const fn inner(&self) -> &$crate::ByteArr<{ $size }> {
                &self.0
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = [u8];

            fn deref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut [u8] {
                &mut self.0
            }
        }

        impl ::core::convert::AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }

        impl ::core::convert::From<[u8; $size]> for $name {
            fn from(value: [u8; $size]) -> Self {
                Self::new(value)
            }
        }

        impl ::core::convert::From<$crate::ByteArr<{ $size }>> for $name {
            fn from(value: $crate::ByteArr<{ $size }>) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::ByteArrError;

            fn try_from(value: &[u8]) -> ::core::result::Result<Self, Self::Error> {
                Self::from_slice(value)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({:#x})", stringify!($name), self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::UpperHex::fmt(&self.0, f)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn test_creation_and_conversion() {
        let value = [1, 2, 3, 4];
        let arr = ByteArr::new(value);
        assert_eq!(arr.as_ref(), &value);
        assert_eq!(ByteArr::<4>::SIZE, 4);

        let slice = [1, 2, 3, 4];
        let from_slice = ByteArr::try_from(slice.as_ref()).unwrap();
        assert_eq!(from_slice, arr);

        let vec = vec![1, 2, 3, 4];
        let from_vec_ref = ByteArr::try_from(&vec).unwrap();
        assert_eq!(from_vec_ref, arr);

        let from_vec = ByteArr::try_from(vec).unwrap();
        assert_eq!(from_vec, arr);
        assert_eq!(<[u8; 4]>::from(from_vec), value);

        // Incorrect lengths
        let too_short = [1, 2, 3];
        assert_eq!(
            ByteArr::<4>::try_from(too_short.as_ref()),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        let too_long = vec![1, 2, 3, 4, 5];
        assert_eq!(
            ByteArr::<4>::try_from(&too_long),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_default_is_zero() {
        let arr = ByteArr::<40>::default();
        assert!(arr.iter().all(|b| *b == 0));
        assert_eq!(arr.len(), 40);
    }

    #[test_case("00010203", Ok([0, 1, 2, 3]); "exact")]
    #[test_case("000102", Err(Error::Hex(UnhexError::TooShort)); "too short")]
    #[test_case("0001020304", Err(Error::Hex(UnhexError::TooLong)); "too long")]
    #[test_case("0x00010203", Err(Error::Hex(UnhexError::UnexpectedPrefix)); "prefixed")]
    #[test_case("0001020g", Err(Error::Hex(UnhexError::NonHex { index: 7 })); "non hex")]
    fn test_from_hex(input: &str, expected: Result<[u8; 4], Error>) {
        assert_eq!(ByteArr::<4>::from_hex(input), expected.map(ByteArr::new));
    }

    #[test]
    fn test_from_hex_with_prefix() {
        assert_eq!(
            ByteArr::<2>::from_hex_with_prefix("0xbeef").unwrap(),
            [0xbe, 0xef]
        );
        assert_eq!(
            ByteArr::<2>::from_hex_with_prefix("beef"),
            Err(Error::Hex(UnhexError::RequiredPrefix))
        );
    }

    #[test]
    fn test_strings() {
        let arr = ByteArr::<5>::from_str_bytes("hello").unwrap();
        assert_eq!(arr.to_string_lossy(), "hello");
        assert_eq!(arr.to_hex(), "68656c6c6f");
        assert!(ByteArr::<4>::from_str_bytes("hello").is_err());

        let invalid = ByteArr::new([b'a', 0xff]);
        assert_eq!(invalid.to_string_lossy(), "a\u{fffd}");
    }

    #[test]
    fn test_ordering_and_hash() {
        let a = ByteArr::new([0, 1]);
        let b = ByteArr::new([1, 0]);
        assert!(a < b);

        let set: HashSet<_> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_format() {
        let arr = ByteArr::new([0xde, 0xad, 0xbe, 0xef, 0x00]);
        assert_eq!(arr.to_string(), "dead…ef00");
        assert_eq!(format!("{:#}", arr), "0xdead…ef00");
        assert_eq!(format!("{:x}", arr), "deadbeef00");
        assert_eq!(format!("{:X}", arr), "DEADBEEF00");
        assert_eq!(format!("{:?}", arr), "ByteArr<5>(0xdeadbeef00)");
    }

    crate::blob_type!(
        /// A test blob.
        Blob4,
        4
    );
    crate::blob_type!(Other4, 4);

    #[test]
    fn test_blob_type() {
        let blob = Blob4::from_hex("01020304").unwrap();
        assert_eq!(&blob[..], &[1, 2, 3, 4]);
        assert_eq!(Blob4::SIZE, 4);
        assert_eq!(Blob4::default().inner(), &ByteArr::default());

        // Test case 0: constructors mirror ByteArr
        assert_eq!(Blob4::from_slice(&[1, 2, 3, 4]).unwrap(), blob);
        assert_eq!(Blob4::from_hex_with_prefix("0x01020304").unwrap(), blob);
        assert_eq!(Blob4::from_str_bytes("abcd").unwrap(), Blob4::new(*b"abcd"));
        assert_eq!(
            Blob4::from_slice(&[1, 2, 3]),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 3
            })
        );

        // Test case 1: formatting
        assert_eq!(blob.to_string(), "01020304");
        assert_eq!(format!("{:?}", blob), "Blob4(0x01020304)");

        // Test case 2: distinct types over the same bytes
        let other = Other4::from(*blob.inner());
        assert_eq!(other.as_ref(), blob.as_ref());
    }
}

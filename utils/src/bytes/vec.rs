//! Owned byte buffers.
//!
//! A byte buffer is a [SizeLimitedVec] of `u8`, so every length-changing operation is checked
//! against the limit. This module adds byte-specific helpers on top: big-endian `put_*`
//! appenders, hex conversions, views, and conversions to and from [Bytes].

use super::view::ByteView;
use crate::{
    hex::{hex, unhex_cfg, Hex, UnhexCfg, UnhexError, MAX_UNHEX_SIZE},
    sized::{Error, SizeLimitedVec, UNBOUNDED},
};
use ::bytes::{Bytes, BytesMut};
use core::fmt;

/// A byte buffer holding at most `MAX` bytes.
pub type LimitedBytes<const MAX: usize> = SizeLimitedVec<u8, MAX>;

/// A byte buffer without a length limit.
pub type ByteVec = LimitedBytes<UNBOUNDED>;

impl<const MAX: usize> SizeLimitedVec<u8, MAX> {
    /// Appends `bytes`.
    pub fn put(&mut self, bytes: &[u8]) -> Result<&mut Self, Error> {
        self.extend_from_slice(bytes)?;
        Ok(self)
    }

    /// Appends the UTF-8 bytes of `s`.
    pub fn put_str(&mut self, s: &str) -> Result<&mut Self, Error> {
        self.put(s.as_bytes())
    }

    /// Appends a single byte.
    pub fn put_u8(&mut self, value: u8) -> Result<&mut Self, Error> {
        self.push(value)?;
        Ok(self)
    }

    /// Appends `value` in big-endian order.
    pub fn put_u32(&mut self, value: u32) -> Result<&mut Self, Error> {
        self.put(&value.to_be_bytes())
    }

    /// Appends `value` in big-endian order.
    pub fn put_u64(&mut self, value: u64) -> Result<&mut Self, Error> {
        self.put(&value.to_be_bytes())
    }

    /// Returns a view over the whole buffer.
    pub fn as_view(&self) -> ByteView<'_> {
        ByteView::new(self.as_slice())
    }

    /// Returns a view over `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn view(&self, offset: usize, len: usize) -> ByteView<'_> {
        self.as_view().subview(offset, len)
    }

    /// Copies `len` bytes starting at `offset` into a new buffer with the same limit.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn sub_buffer(&self, offset: usize, len: usize) -> Self {
        Self::from_vec_unchecked(self[offset..offset + len].to_vec())
    }

    /// Returns the full lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex(self.as_slice())
    }

    /// Decodes unprefixed hex, rejecting inputs that decode to more than `MAX` bytes.
    pub fn from_hex(s: &str) -> Result<Self, UnhexError> {
        let cfg = UnhexCfg {
            max_len: MAX.min(MAX_UNHEX_SIZE),
            ..UnhexCfg::default()
        };
        let bytes = unhex_cfg(s, &cfg)?;
        Self::try_from(bytes).map_err(|err| match err {
            Error::CapacityExceeded { limit, requested } => {
                UnhexError::ExceedsLimit { limit, requested }
            }
        })
    }

    /// Copies the UTF-8 bytes of `s`.
    pub fn from_str_bytes(s: &str) -> Result<Self, Error> {
        Self::try_from(s.as_bytes())
    }

    /// Interprets the bytes as UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_slice()).ok()
    }

    /// Returns the underlying vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.into_inner()
    }

    /// Converts the buffer into an immutable, cheaply cloneable [Bytes] without copying.
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.into_inner())
    }
}

impl<const MAX: usize> fmt::Display for SizeLimitedVec<u8, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Hex::new(self.as_slice()), f)
    }
}

impl<const MAX: usize> fmt::LowerHex for SizeLimitedVec<u8, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&Hex::new(self.as_slice()), f)
    }
}

impl<const MAX: usize> fmt::UpperHex for SizeLimitedVec<u8, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&Hex::new(self.as_slice()), f)
    }
}

impl<const MAX: usize> TryFrom<Bytes> for SizeLimitedVec<u8, MAX> {
    type Error = Error;

    fn try_from(value: Bytes) -> Result<Self, Self::Error> {
        Self::try_from(Vec::from(value))
    }
}

impl<const MAX: usize> TryFrom<BytesMut> for SizeLimitedVec<u8, MAX> {
    type Error = Error;

    fn try_from(value: BytesMut) -> Result<Self, Self::Error> {
        Self::try_from(Vec::from(value))
    }
}

impl<const MAX: usize> From<SizeLimitedVec<u8, MAX>> for Bytes {
    fn from(value: SizeLimitedVec<u8, MAX>) -> Self {
        value.freeze()
    }
}

impl<const MAX: usize> From<SizeLimitedVec<u8, MAX>> for BytesMut {
    fn from(value: SizeLimitedVec<u8, MAX>) -> Self {
        BytesMut::from(value.as_slice())
    }
}

impl<'a, const MAX: usize> From<&'a SizeLimitedVec<u8, MAX>> for ByteView<'a> {
    fn from(value: &'a SizeLimitedVec<u8, MAX>) -> Self {
        value.as_view()
    }
}

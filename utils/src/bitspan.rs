//! Bit-indexed spans over byte slices.
//!
//! A span covers the bit range `[start, end)` of the underlying bytes. Bits are numbered
//! least-significant first within each byte: bit `i` of a span lives in byte `(start + i) / 8`
//! at position `(start + i) % 8`.

use core::fmt::{self, Write as _};

/// Number of bits in a byte.
const BITS_PER_BYTE: usize = u8::BITS as usize;

#[inline]
fn read_bit(bytes: &[u8], bit: usize) -> bool {
    (bytes[bit / BITS_PER_BYTE] >> (bit % BITS_PER_BYTE)) & 1 == 1
}

/// Reads `len` (at most 8) bits starting at absolute bit `start` into the low bits of a byte.
#[inline]
fn read_byte(bytes: &[u8], start: usize, len: usize) -> u8 {
    if len == 0 {
        return 0;
    }
    let first = start / BITS_PER_BYTE;
    let last = (start + len - 1) / BITS_PER_BYTE;
    let shift = start % BITS_PER_BYTE;
    let mut value = (bytes[first] as u16) >> shift;
    if last != first {
        value |= (bytes[last] as u16) << (BITS_PER_BYTE - shift);
    }
    (value & ((1u16 << len) - 1)) as u8
}

fn check_range(bytes_len: usize, start: usize, end: usize) {
    assert!(start <= end, "bit range start {start} exceeds end {end}");
    assert!(
        end <= bytes_len * BITS_PER_BYTE,
        "bit range end {end} exceeds {} available bits",
        bytes_len * BITS_PER_BYTE
    );
}

/// A read-only span of bits.
#[derive(Clone, Copy, Default)]
pub struct BitSpan<'a> {
    bytes: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> BitSpan<'a> {
    /// Creates a span over every bit of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            start: 0,
            end: bytes.len() * BITS_PER_BYTE,
        }
    }

    /// Creates a span over bits `[start, end)` of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` is past the last bit of `bytes`.
    pub fn with_range(bytes: &'a [u8], start: usize, end: usize) -> Self {
        check_range(bytes.len(), start, end);
        Self { bytes, start, end }
    }

    /// Returns the number of bits in the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span has no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the bit at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        Some(read_bit(self.bytes, self.start + index))
    }

    /// Returns the bit at `index` as `0` or `1`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        assert!(index < self.len(), "bit index {index} out of bounds");
        read_bit(self.bytes, self.start + index) as u8
    }

    /// Reads `len` bits starting at `offset` into the low bits of a byte (bit `offset` becomes
    /// the least-significant bit). The bits may straddle two bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len > 8` or the range extends past the end of the span.
    pub fn get_as_byte(&self, offset: usize, len: usize) -> u8 {
        assert!(len <= BITS_PER_BYTE, "cannot read {len} bits into a byte");
        assert!(
            offset + len <= self.len(),
            "bit range {offset}..{} out of bounds",
            offset + len
        );
        read_byte(self.bytes, self.start + offset, len)
    }

    /// Returns the span of `len` bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the end of the span.
    pub fn subspan(&self, offset: usize, len: usize) -> BitSpan<'a> {
        assert!(offset + len <= self.len(), "subspan out of bounds");
        Self {
            bytes: self.bytes,
            start: self.start + offset,
            end: self.start + offset + len,
        }
    }

    /// Returns the span without its first `count` bits.
    ///
    /// # Panics
    ///
    /// Panics if `count > len`.
    pub fn skip_first(&self, count: usize) -> BitSpan<'a> {
        self.subspan(count, self.len() - count.min(self.len()))
    }

    /// Returns an iterator over the bits.
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            span: *self,
            pos: 0,
        }
    }
}

impl PartialEq for BitSpan<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for BitSpan<'_> {}

impl fmt::Display for BitSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSpan[{}..{}]({self})", self.start, self.end)
    }
}

impl<'a> IntoIterator for BitSpan<'a> {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the bits of a [BitSpan].
pub struct Iter<'a> {
    span: BitSpan<'a>,
    pos: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.span.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.span.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A span of bits that can be modified in place.
pub struct BitSpanMut<'a> {
    bytes: &'a mut [u8],
    start: usize,
    end: usize,
}

impl<'a> BitSpanMut<'a> {
    /// Creates a span over every bit of `bytes`.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        let end = bytes.len() * BITS_PER_BYTE;
        Self {
            bytes,
            start: 0,
            end,
        }
    }

    /// Creates a span over bits `[start, end)` of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` is past the last bit of `bytes`.
    pub fn with_range(bytes: &'a mut [u8], start: usize, end: usize) -> Self {
        check_range(bytes.len(), start, end);
        Self { bytes, start, end }
    }

    /// Borrows the span as read-only.
    pub fn as_span(&self) -> BitSpan<'_> {
        BitSpan {
            bytes: &*self.bytes,
            start: self.start,
            end: self.end,
        }
    }

    /// Returns the number of bits in the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span has no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// See [BitSpan::get].
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.as_span().get(index)
    }

    /// See [BitSpan::bit].
    #[inline]
    pub fn bit(&self, index: usize) -> u8 {
        self.as_span().bit(index)
    }

    /// See [BitSpan::get_as_byte].
    pub fn get_as_byte(&self, offset: usize, len: usize) -> u8 {
        self.as_span().get_as_byte(offset, len)
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len(), "bit index {index} out of bounds");
        let bit = self.start + index;
        let mask = 1u8 << (bit % BITS_PER_BYTE);
        let byte = &mut self.bytes[bit / BITS_PER_BYTE];
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Reborrows `len` bits starting at `offset` as a mutable span.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past the end of the span.
    pub fn subspan_mut(&mut self, offset: usize, len: usize) -> BitSpanMut<'_> {
        assert!(offset + len <= self.len(), "subspan out of bounds");
        BitSpanMut {
            bytes: &mut *self.bytes,
            start: self.start + offset,
            end: self.start + offset + len,
        }
    }

    /// Consumes the span, dropping its first `count` bits.
    ///
    /// # Panics
    ///
    /// Panics if `count > len`.
    pub fn skip_first(self, count: usize) -> BitSpanMut<'a> {
        assert!(count <= self.len(), "cannot skip {count} bits");
        Self {
            bytes: self.bytes,
            start: self.start + count,
            end: self.end,
        }
    }
}

impl<'a> From<BitSpanMut<'a>> for BitSpan<'a> {
    fn from(span: BitSpanMut<'a>) -> Self {
        BitSpan {
            bytes: span.bytes,
            start: span.start,
            end: span.end,
        }
    }
}

impl fmt::Display for BitSpanMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_span(), f)
    }
}

impl fmt::Debug for BitSpanMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_span(), f)
    }
}

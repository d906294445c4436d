//! A byte buffer that is either borrowed or owned.

use super::{vec::ByteVec, view::ByteView};
use core::{fmt, ops::Deref};

/// Bytes that are borrowed until they need to be modified.
///
/// The first call to [ByteVecOrView::to_mut] copies a borrowed view into an owned [ByteVec];
/// later calls reuse the copy.
#[derive(Clone)]
pub enum ByteVecOrView<'a> {
    Borrowed(ByteView<'a>),
    Owned(ByteVec),
}

impl<'a> ByteVecOrView<'a> {
    /// Returns true if the bytes are owned.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Returns a view over the bytes.
    pub fn view(&self) -> ByteView<'_> {
        match self {
            Self::Borrowed(view) => *view,
            Self::Owned(vec) => vec.as_view(),
        }
    }

    /// Returns the owned buffer, copying borrowed bytes first.
    pub fn to_mut(&mut self) -> &mut ByteVec {
        match *self {
            Self::Owned(ref mut vec) => vec,
            Self::Borrowed(view) => {
                *self = Self::Owned(ByteVec::from_vec_unchecked(view.to_vec()));
                self.to_mut()
            }
        }
    }

    /// Returns the bytes as a vector, copying only if they are borrowed.
    pub fn into_vec(self) -> Vec<u8> {
        match self {
            Self::Borrowed(view) => view.to_vec(),
            Self::Owned(vec) => vec.into_vec(),
        }
    }

    /// Detaches the bytes from the borrowed source.
    pub fn into_owned(self) -> ByteVecOrView<'static> {
        ByteVecOrView::Owned(match self {
            Self::Borrowed(view) => ByteVec::from_vec_unchecked(view.to_vec()),
            Self::Owned(vec) => vec,
        })
    }
}

impl Default for ByteVecOrView<'_> {
    fn default() -> Self {
        Self::Borrowed(ByteView::default())
    }
}

impl Deref for ByteVecOrView<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Borrowed(view) => view.as_bytes(),
            Self::Owned(vec) => vec.as_slice(),
        }
    }
}

impl AsRef<[u8]> for ByteVecOrView<'_> {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl<'a> From<ByteView<'a>> for ByteVecOrView<'a> {
    fn from(view: ByteView<'a>) -> Self {
        Self::Borrowed(view)
    }
}

impl<'a> From<&'a [u8]> for ByteVecOrView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Borrowed(ByteView::new(bytes))
    }
}

impl From<ByteVec> for ByteVecOrView<'_> {
    fn from(vec: ByteVec) -> Self {
        Self::Owned(vec)
    }
}

impl From<Vec<u8>> for ByteVecOrView<'_> {
    fn from(vec: Vec<u8>) -> Self {
        Self::Owned(ByteVec::from_vec_unchecked(vec))
    }
}

impl PartialEq for ByteVecOrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for ByteVecOrView<'_> {}

impl PartialEq<[u8]> for ByteVecOrView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        **self == *other
    }
}

impl PartialEq<&[u8]> for ByteVecOrView<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        **self == **other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteVecOrView<'_> {
    fn eq(&self, other: &[u8; N]) -> bool {
        **self == *other
    }
}

impl fmt::Debug for ByteVecOrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrowed(view) => write!(f, "Borrowed({view:#x})"),
            Self::Owned(vec) => write!(f, "Owned({vec:#x})"),
        }
    }
}

impl fmt::Display for ByteVecOrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

//! Byte-oriented utility primitives.
//!
//! # Overview
//!
//! - [SizeLimitedVec]: a vector whose length can never exceed a const-generic limit. Every
//!   operation that could grow it returns a [Result] and leaves it untouched on failure.
//! - [hex](mod@hex): hex encoding with a configurable [Hex] display adapter, and strict
//!   decoding with typed [UnhexError]s.
//! - [bytes](mod@crate::bytes): [ByteView], [ByteVec] / [LimitedBytes], [ByteArr] (and the
//!   [blob_type] macro for strongly-typed fixed-size blobs), and [ByteVecOrView].
//! - [BitSpan] / [BitSpanMut]: bit-indexed spans over byte slices.
//! - [Tagged]: a value distinguished at the type level by a marker tag.
//! - [FinalAction]: a guard that runs a closure on scope exit.
//!
//! # Example
//!
//! ```
//! use qtils::{CapacityError, LimitedBytes};
//!
//! let mut buf = LimitedBytes::<4>::new();
//! buf.put_u8(0x01).unwrap().put(&[0x02, 0x03]).unwrap();
//! assert_eq!(
//!     buf.put_u32(0),
//!     Err(CapacityError::CapacityExceeded { limit: 4, requested: 7 })
//! );
//! assert_eq!(buf.to_hex(), "010203");
//! ```

pub mod bitspan;
pub use bitspan::{BitSpan, BitSpanMut};
pub mod bytes;
pub use crate::bytes::{
    cmp_len_first, ByteArr, ByteArrError, ByteVec, ByteVecOrView, ByteView, LimitedBytes,
};
mod guard;
pub use guard::{defer, FinalAction};
pub mod hex;
pub use hex::{
    from_hex_formatted, hex, hex_upper, unhex, unhex0x, unhex_cfg, unhex_into, unhex_size, Case,
    Hex, HexFormat, PrefixPolicy, UnhexCfg, UnhexError, MAX_UNHEX_SIZE,
};
pub mod sized;
pub use sized::{Error as CapacityError, SizeLimitedVec, UNBOUNDED};
mod tagged;
pub use tagged::Tagged;

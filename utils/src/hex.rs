//! Hex encoding and decoding.
//!
//! Encoding comes in two flavors: [hex] / [hex_upper] produce the full string, while [Hex] is
//! a display adapter whose output is controlled by a [HexFormat]:
//!
//! | format                                | `[01 02 00 0a 0b]` | `[]`      |
//! |---------------------------------------|--------------------|-----------|
//! | `HexFormat::default()` (`{}`)         | `0102…0a0b`        | `<empty>` |
//! | `prefix` (or `{:#}`)                  | `0x0102…0a0b`      | `0x`      |
//! | `full`                                | `0102000a0b`       | `<empty>` |
//! | `case: Case::Upper`                   | `0102…0A0B`        | `<empty>` |
//! | `{:x}` / `{:X}` (always full)         | `0102000a0b`       | (empty)   |
//! | `{:#x}` / `{:#X}`                     | `0x0102000a0b`     | `0x`      |
//!
//! Inputs of at most four bytes are never abbreviated.
//!
//! Decoding is strict by default: no `0x` prefix, an even number of digits, and a decoded size
//! of at most [MAX_UNHEX_SIZE]. [UnhexCfg] relaxes or tightens these rules.

use core::fmt::{self, Write as _};
use thiserror::Error;
use tracing::debug;

/// Maximum decoded size (in bytes) accepted by [unhex] and [unhex0x].
pub const MAX_UNHEX_SIZE: usize = 64 * 1024 * 1024;

/// Number of leading bytes shown by an abbreviated [Hex].
const HEAD: usize = 2;

/// Number of trailing bytes shown by an abbreviated [Hex].
const TAIL: usize = 2;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Errors returned when decoding hex.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnhexError {
    #[error("string should not begin with \"0x\"")]
    UnexpectedPrefix,
    #[error("expected prefix \"0x\"")]
    RequiredPrefix,
    #[error("string length is not divisible by 2")]
    OddLength,
    #[error("input is shorter than the target buffer")]
    TooShort,
    #[error("input is longer than the target buffer")]
    TooLong,
    #[error("decoded size {requested} exceeds limit {limit}")]
    ExceedsLimit { limit: usize, requested: usize },
    #[error("non-hexadecimal character at index {index}")]
    NonHex { index: usize },
}

/// Letter case of hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

impl Case {
    fn table(self) -> &'static [u8; 16] {
        match self {
            Case::Lower => LOWER,
            Case::Upper => UPPER,
        }
    }
}

/// Display configuration for [Hex].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexFormat {
    /// Start the output with `0x`.
    pub prefix: bool,
    /// Digit case.
    pub case: Case,
    /// Print every byte instead of the head and tail of long inputs.
    pub full: bool,
}

/// Display adapter that formats a byte slice as hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex<'a> {
    bytes: &'a [u8],
    format: HexFormat,
}

impl<'a> Hex<'a> {
    /// Wraps `bytes` with the default (abbreviated, lowercase, unprefixed) format.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            format: HexFormat::default(),
        }
    }

    /// Replaces the display format.
    pub fn with_format(mut self, format: HexFormat) -> Self {
        self.format = format;
        self
    }

    /// Starts the output with `0x`.
    pub fn prefixed(mut self) -> Self {
        self.format.prefix = true;
        self
    }

    /// Uses uppercase digits.
    pub fn upper(mut self) -> Self {
        self.format.case = Case::Upper;
        self
    }

    /// Prints every byte.
    pub fn full(mut self) -> Self {
        self.format.full = true;
        self
    }

    /// Returns the wrapped bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Returns the display format.
    pub fn format(&self) -> HexFormat {
        self.format
    }
}

fn write_digits(w: &mut dyn fmt::Write, bytes: &[u8], case: Case) -> fmt::Result {
    let table = case.table();
    for byte in bytes {
        w.write_char(table[(byte >> 4) as usize] as char)?;
        w.write_char(table[(byte & 0x0f) as usize] as char)?;
    }
    Ok(())
}

fn write_full(w: &mut dyn fmt::Write, bytes: &[u8], case: Case, prefix: bool) -> fmt::Result {
    if prefix {
        w.write_str("0x")?;
    }
    write_digits(w, bytes, case)
}

/// Writes the output of `render` directly, or through [fmt::Formatter::pad] when a width is set.
fn padded<F>(f: &mut fmt::Formatter<'_>, render: F) -> fmt::Result
where
    F: Fn(&mut dyn fmt::Write) -> fmt::Result,
{
    if f.width().is_none() {
        return render(f);
    }
    let mut out = String::new();
    render(&mut out)?;
    f.pad(&out)
}

impl Hex<'_> {
    fn render(&self, w: &mut dyn fmt::Write, prefix: bool) -> fmt::Result {
        if self.bytes.is_empty() {
            return w.write_str(if prefix { "0x" } else { "<empty>" });
        }
        let len = self.bytes.len();
        if self.format.full || len <= HEAD + TAIL {
            return write_full(w, self.bytes, self.format.case, prefix);
        }
        write_full(w, &self.bytes[..HEAD], self.format.case, prefix)?;
        w.write_str("…")?;
        write_digits(w, &self.bytes[len - TAIL..], self.format.case)
    }
}

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.format.prefix || f.alternate();
        padded(f, |w| self.render(w, prefix))
    }
}

impl fmt::LowerHex for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = f.alternate();
        padded(f, |w| write_full(w, self.bytes, Case::Lower, prefix))
    }
}

impl fmt::UpperHex for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = f.alternate();
        padded(f, |w| write_full(w, self.bytes, Case::Upper, prefix))
    }
}

fn encode(bytes: &[u8], case: Case) -> String {
    let table = case.table();
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        hex.push(table[(byte >> 4) as usize] as char);
        hex.push(table[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    encode(bytes, Case::Lower)
}

/// Converts bytes to an uppercase hexadecimal string.
pub fn hex_upper(bytes: &[u8]) -> String {
    encode(bytes, Case::Upper)
}

/// How a `0x` prefix is treated when decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefixPolicy {
    /// A leading `0x` is an error.
    #[default]
    Forbidden,
    /// A leading `0x` must be present.
    Required,
    /// A leading `0x` is stripped if present.
    Optional,
}

/// Configuration for [unhex_cfg].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnhexCfg {
    /// Treatment of a leading `0x`.
    pub prefix: PrefixPolicy,
    /// Maximum number of decoded bytes.
    pub max_len: usize,
}

impl Default for UnhexCfg {
    fn default() -> Self {
        Self {
            prefix: PrefixPolicy::Forbidden,
            max_len: MAX_UNHEX_SIZE,
        }
    }
}

fn strip_prefix(s: &str, policy: PrefixPolicy) -> Result<&str, UnhexError> {
    match (s.strip_prefix("0x"), policy) {
        (Some(_), PrefixPolicy::Forbidden) => Err(UnhexError::UnexpectedPrefix),
        (Some(digits), _) if digits.starts_with("0x") => Err(UnhexError::UnexpectedPrefix),
        (Some(digits), _) => Ok(digits),
        (None, PrefixPolicy::Required) => Err(UnhexError::RequiredPrefix),
        (None, _) => Ok(s),
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes `digits` into `out`, which must be exactly half as long.
fn decode_into(digits: &[u8], out: &mut [u8]) -> Result<(), UnhexError> {
    debug_assert_eq!(digits.len(), out.len() * 2);
    for (i, (pair, byte)) in digits.chunks_exact(2).zip(out.iter_mut()).enumerate() {
        let hi = nibble(pair[0]).ok_or(UnhexError::NonHex { index: 2 * i })?;
        let lo = nibble(pair[1]).ok_or(UnhexError::NonHex { index: 2 * i + 1 })?;
        *byte = (hi << 4) | lo;
    }
    Ok(())
}

/// Returns the number of bytes `s` decodes to, ignoring a leading `0x`.
pub fn unhex_size(s: &str) -> usize {
    s.strip_prefix("0x").unwrap_or(s).len() / 2
}

/// Decodes hex according to `cfg`.
pub fn unhex_cfg(s: &str, cfg: &UnhexCfg) -> Result<Vec<u8>, UnhexError> {
    let digits = strip_prefix(s, cfg.prefix)?;
    if digits.len() % 2 != 0 {
        return Err(UnhexError::OddLength);
    }
    let len = digits.len() / 2;
    if len > cfg.max_len {
        debug!(limit = cfg.max_len, requested = len, "hex input exceeds limit");
        return Err(UnhexError::ExceedsLimit {
            limit: cfg.max_len,
            requested: len,
        });
    }
    let mut out = vec![0u8; len];
    decode_into(digits.as_bytes(), &mut out)?;
    Ok(out)
}

/// Decodes unprefixed hex.
pub fn unhex(s: &str) -> Result<Vec<u8>, UnhexError> {
    unhex_cfg(s, &UnhexCfg::default())
}

/// Decodes `0x`-prefixed hex. If `optional` is set, unprefixed input is accepted too.
pub fn unhex0x(s: &str, optional: bool) -> Result<Vec<u8>, UnhexError> {
    let prefix = if optional {
        PrefixPolicy::Optional
    } else {
        PrefixPolicy::Required
    };
    unhex_cfg(
        s,
        &UnhexCfg {
            prefix,
            ..UnhexCfg::default()
        },
    )
}

/// Decodes unprefixed hex into a fixed-size buffer, which the input must fill exactly.
pub fn unhex_into(out: &mut [u8], s: &str) -> Result<(), UnhexError> {
    let digits = strip_prefix(s, PrefixPolicy::Forbidden)?;
    if digits.len() % 2 != 0 {
        return Err(UnhexError::OddLength);
    }
    let len = digits.len() / 2;
    if len < out.len() {
        return Err(UnhexError::TooShort);
    }
    if len > out.len() {
        return Err(UnhexError::TooLong);
    }
    decode_into(digits.as_bytes(), out)
}

/// Decodes hex after stripping whitespace and an optional `0x` prefix. Commonly used in testing
/// to embed external test vectors without modification.
pub fn from_hex_formatted(hex: &str) -> Result<Vec<u8>, UnhexError> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    unhex0x(&hex, true)
}

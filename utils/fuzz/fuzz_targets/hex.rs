#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qtils::{
    hex, hex_upper, unhex, unhex0x, unhex_cfg, unhex_into, ByteArr, Hex, LimitedBytes,
    PrefixPolicy, UnhexCfg, UnhexError,
};

#[derive(Arbitrary, Debug)]
enum HexOperation {
    Encode(Vec<u8>),
    Decode(String),
    DecodePrefixed(String, bool),
    DecodeLimited(String, u8),
    DecodeFixed(String),
    Display(Vec<u8>),
}

fn fuzz(op: HexOperation) {
    match op {
        HexOperation::Encode(bytes) => {
            let lower = hex(&bytes);
            assert_eq!(lower.len(), bytes.len() * 2);
            assert_eq!(unhex(&lower).unwrap(), bytes);
            assert_eq!(unhex(&hex_upper(&bytes)).unwrap(), bytes);
            assert_eq!(unhex0x(&format!("0x{lower}"), false).unwrap(), bytes);
            assert_eq!(LimitedBytes::<64>::from_hex(&lower).is_ok(), bytes.len() <= 64);
        }
        HexOperation::Decode(s) => {
            if let Ok(bytes) = unhex(&s) {
                assert_eq!(hex(&bytes), s.to_ascii_lowercase());
            }
        }
        HexOperation::DecodePrefixed(s, optional) => {
            let result = unhex0x(&s, optional);
            if !optional && !s.starts_with("0x") {
                assert_eq!(result, Err(UnhexError::RequiredPrefix));
            }
        }
        HexOperation::DecodeLimited(s, max_len) => {
            let cfg = UnhexCfg {
                prefix: PrefixPolicy::Optional,
                max_len: max_len as usize,
            };
            if let Ok(bytes) = unhex_cfg(&s, &cfg) {
                assert!(bytes.len() <= max_len as usize);
            }
        }
        HexOperation::DecodeFixed(s) => {
            let mut out = [0u8; 8];
            let result = unhex_into(&mut out, &s);
            assert_eq!(result.is_ok(), ByteArr::<8>::from_hex(&s).is_ok());
            if result.is_ok() {
                assert_eq!(hex(&out), s.to_ascii_lowercase());
            }
        }
        HexOperation::Display(bytes) => {
            let full = format!("{:x}", Hex::new(&bytes));
            assert_eq!(full, hex(&bytes));
            let short = Hex::new(&bytes).to_string();
            if bytes.is_empty() {
                assert_eq!(short, "<empty>");
            } else if bytes.len() <= 4 {
                assert_eq!(short, full);
            } else {
                assert!(short.contains('…'));
            }
        }
    }
}

fuzz_target!(|ops: Vec<HexOperation>| {
    for op in ops {
        fuzz(op);
    }
});

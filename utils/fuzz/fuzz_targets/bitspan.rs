#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qtils::{BitSpan, BitSpanMut};

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    start: u16,
    len: u16,
    ops: Vec<BitOperation>,
}

#[derive(Arbitrary, Debug)]
enum BitOperation {
    Set(u16, bool),
    GetAsByte(u16, u8),
    Subspan(u16, u16),
    SkipFirst(u16),
}

fn fuzz(input: Input) {
    let mut bytes = input.bytes;
    let total = bytes.len() * 8;
    let start = (input.start as usize).min(total);
    let end = (start + input.len as usize).min(total);
    let mut model: Vec<bool> = BitSpan::with_range(&bytes, start, end).iter().collect();

    for op in input.ops {
        let mut span = BitSpanMut::with_range(&mut bytes, start, end);
        match op {
            BitOperation::Set(i, value) => {
                let i = i as usize;
                if i < model.len() {
                    span.set(i, value);
                    model[i] = value;
                }
            }
            BitOperation::GetAsByte(offset, len) => {
                let offset = offset as usize;
                let len = (len % 9) as usize;
                if offset + len <= model.len() {
                    let expected = model[offset..offset + len]
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (i, bit)| acc | ((*bit as u8) << i));
                    assert_eq!(span.get_as_byte(offset, len), expected);
                }
            }
            BitOperation::Subspan(offset, len) => {
                let (offset, len) = (offset as usize, len as usize);
                if offset + len <= model.len() {
                    let view = span.as_span();
                    let sub = view.subspan(offset, len);
                    assert!(sub.iter().eq(model[offset..offset + len].iter().copied()));
                }
            }
            BitOperation::SkipFirst(count) => {
                let count = count as usize;
                if count <= model.len() {
                    let rest = BitSpan::from(span.skip_first(count));
                    assert_eq!(rest.len(), model.len() - count);
                    assert!(rest.iter().eq(model[count..].iter().copied()));
                }
            }
        }
    }

    let span = BitSpan::with_range(&bytes, start, end);
    assert!(span.iter().eq(model.iter().copied()));
    assert_eq!(span.to_string().len(), model.len());
}

fuzz_target!(|input: Input| {
    fuzz(input);
});

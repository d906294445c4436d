#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use qtils::{CapacityError, SizeLimitedVec};

const LIMIT: usize = 32;

#[derive(Arbitrary, Debug)]
enum SizedOperation {
    Push(u8),
    EmplaceBack(u8),
    ExtendFromSlice(Vec<u8>),
    TryExtend(u8, u16),
    Insert(u8, u8),
    InsertElem(u8, u8, u8),
    InsertSlice(u8, Vec<u8>),
    Assign(Vec<u8>),
    AssignElem(u8, u8),
    Reserve(u8),
    Resize(u8, u8),
    Pop,
    Truncate(u8),
    Remove(u8),
    SwapRemove(u8),
    Retain(u8),
    Clear,
}

fn fuzz(ops: Vec<SizedOperation>) {
    let mut v = SizeLimitedVec::<u8, LIMIT>::new();
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        let before = model.clone();
        let result: Result<(), CapacityError> = match &op {
            SizedOperation::Push(x) => v.push(*x).map(|_| model.push(*x)),
            SizedOperation::EmplaceBack(x) => v.emplace_back(|| *x).map(|_| model.push(*x)),
            SizedOperation::ExtendFromSlice(items) => v
                .extend_from_slice(items)
                .map(|_| model.extend_from_slice(items)),
            SizedOperation::TryExtend(x, n) => {
                let iter = std::iter::repeat(*x).take(*n as usize);
                v.try_extend(iter.clone()).map(|_| model.extend(iter))
            }
            SizedOperation::Insert(i, x) => {
                let i = *i as usize;
                if i > model.len() {
                    continue;
                }
                v.insert(i, *x).map(|_| model.insert(i, *x))
            }
            SizedOperation::InsertElem(i, x, n) => {
                let i = *i as usize;
                if i > model.len() {
                    continue;
                }
                v.insert_elem(i, *x, *n as usize).map(|_| {
                    model.splice(i..i, std::iter::repeat(*x).take(*n as usize));
                })
            }
            SizedOperation::InsertSlice(i, items) => {
                let i = *i as usize;
                if i > model.len() {
                    continue;
                }
                v.insert_slice(i, items).map(|_| {
                    model.splice(i..i, items.iter().copied());
                })
            }
            SizedOperation::Assign(items) => {
                v.assign_slice(items).map(|_| model = items.clone())
            }
            SizedOperation::AssignElem(x, n) => v
                .assign_elem(*x, *n as usize)
                .map(|_| model = vec![*x; *n as usize]),
            SizedOperation::Reserve(n) => {
                let result = v.reserve(*n as usize);
                assert_eq!(result.is_ok(), *n as usize <= LIMIT);
                result
            }
            SizedOperation::Resize(n, x) => v
                .resize(*n as usize, *x)
                .map(|_| model.resize(*n as usize, *x)),
            SizedOperation::Pop => {
                assert_eq!(v.pop(), model.pop());
                Ok(())
            }
            SizedOperation::Truncate(n) => {
                v.truncate(*n as usize);
                model.truncate(*n as usize);
                Ok(())
            }
            SizedOperation::Remove(i) => {
                let i = *i as usize;
                if i >= model.len() {
                    continue;
                }
                assert_eq!(v.remove(i), model.remove(i));
                Ok(())
            }
            SizedOperation::SwapRemove(i) => {
                let i = *i as usize;
                if i >= model.len() {
                    continue;
                }
                assert_eq!(v.swap_remove(i), model.swap_remove(i));
                Ok(())
            }
            SizedOperation::Retain(x) => {
                v.retain(|y| y != x);
                model.retain(|y| y != x);
                Ok(())
            }
            SizedOperation::Clear => {
                v.clear();
                model.clear();
                Ok(())
            }
        };

        if let Err(CapacityError::CapacityExceeded { limit, requested }) = result {
            assert_eq!(limit, LIMIT);
            assert!(requested > LIMIT, "{op:?}");
            assert_eq!(model, before);
        }
        assert!(v.len() <= LIMIT, "{op:?}");
        assert!(v.capacity() <= LIMIT, "{op:?}");
        assert_eq!(v, model, "{op:?}");
    }
}

fuzz_target!(|ops: Vec<SizedOperation>| {
    fuzz(ops);
});

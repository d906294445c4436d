use qtils::{CapacityError, SizeLimitedVec, UNBOUNDED};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn push_past_limit_fails() {
    let mut v = SizeLimitedVec::<i32, 2>::new();
    assert!(v.push(1).is_ok());
    assert_eq!(v.len(), 1);
    assert!(v.push(2).is_ok());
    assert_eq!(v.len(), 2);

    let err = v.push(3).unwrap_err();
    assert!(matches!(err, CapacityError::CapacityExceeded { limit: 2, .. }));
    assert_eq!(v.len(), 2);
    assert_eq!(v, [1, 2]);
}

#[test]
fn construct_from_initializer() {
    assert!(SizeLimitedVec::<i32, 3>::try_from([1, 2, 3, 4]).is_err());

    let v = SizeLimitedVec::<i32, 3>::try_from([1, 2, 3]).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.into_inner(), vec![1, 2, 3]);
}

#[test]
fn error_message_names_limit() {
    let err = SizeLimitedVec::<u8, 1>::with_len(5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "capacity exceeded: limited to 1, requested 5"
    );
}

#[test]
fn reserve_and_resize_bounds() {
    let mut v = SizeLimitedVec::<u16, 8>::new();
    assert!(v.reserve(8).is_ok());
    assert!(v.capacity() <= 8);
    assert!(v.reserve(9).is_err());

    assert!(v.resize(8, 7).is_ok());
    assert!(v.iter().all(|x| *x == 7));
    assert!(v.resize(9, 7).is_err());
    assert_eq!(v.len(), 8);
    assert!(v.resize_default(2).is_ok());
    assert_eq!(v, [7, 7]);
}

#[test]
fn unbounded_behaves_like_vec() {
    let mut v = SizeLimitedVec::<usize, UNBOUNDED>::new();
    for i in 0..10_000 {
        v.push(i).unwrap();
    }
    v.insert_slice(0, &[1, 2, 3]).unwrap();
    assert_eq!(v.len(), 10_003);
    assert_eq!(v.max_size(), usize::MAX);
}

#[derive(Debug)]
enum Op {
    Push(u8),
    Extend(usize),
    Insert(usize, u8),
    InsertElem(usize, usize),
    Resize(usize),
    Assign(usize),
    Reserve(usize),
    Pop,
    Truncate(usize),
    Remove(usize),
}

fn random_op(rng: &mut StdRng) -> Op {
    match rng.gen_range(0..10) {
        0 => Op::Push(rng.gen()),
        1 => Op::Extend(rng.gen_range(0..8)),
        2 => Op::Insert(rng.gen_range(0..24), rng.gen()),
        3 => Op::InsertElem(rng.gen_range(0..24), rng.gen_range(0..6)),
        4 => Op::Resize(rng.gen_range(0..24)),
        5 => Op::Assign(rng.gen_range(0..24)),
        6 => Op::Reserve(rng.gen_range(0..24)),
        7 => Op::Pop,
        8 => Op::Truncate(rng.gen_range(0..24)),
        _ => Op::Remove(rng.gen_range(0..24)),
    }
}

#[test]
fn random_operations_respect_limit() {
    const LIMIT: usize = 16;
    let mut rng = StdRng::seed_from_u64(42);
    let mut v = SizeLimitedVec::<u8, LIMIT>::new();
    let mut model: Vec<u8> = Vec::new();

    for _ in 0..10_000 {
        let op = random_op(&mut rng);
        let before = v.clone();
        let ok = match op {
            Op::Push(x) => {
                let ok = v.push(x).is_ok();
                if ok {
                    model.push(x);
                }
                ok
            }
            Op::Extend(n) => {
                let items = vec![1u8; n];
                let ok = v.extend_from_slice(&items).is_ok();
                if ok {
                    model.extend_from_slice(&items);
                }
                ok
            }
            Op::Insert(i, x) => {
                if i > v.len() {
                    continue;
                }
                let ok = v.insert(i, x).is_ok();
                if ok {
                    model.insert(i, x);
                }
                ok
            }
            Op::InsertElem(i, n) => {
                if i > v.len() {
                    continue;
                }
                let ok = v.insert_elem(i, 9, n).is_ok();
                if ok {
                    model.splice(i..i, std::iter::repeat(9).take(n)).for_each(drop);
                }
                ok
            }
            Op::Resize(n) => {
                let ok = v.resize(n, 3).is_ok();
                if ok {
                    model.resize(n, 3);
                }
                ok
            }
            Op::Assign(n) => {
                let ok = v.assign_iter((0..n).map(|x| x as u8)).is_ok();
                if ok {
                    model = (0..n).map(|x| x as u8).collect();
                }
                ok
            }
            Op::Reserve(n) => {
                let ok = v.reserve(n).is_ok();
                assert_eq!(ok, n <= LIMIT);
                ok
            }
            Op::Pop => {
                assert_eq!(v.pop(), model.pop());
                true
            }
            Op::Truncate(n) => {
                v.truncate(n);
                model.truncate(n);
                true
            }
            Op::Remove(i) => {
                if i >= v.len() {
                    continue;
                }
                assert_eq!(v.remove(i), model.remove(i));
                true
            }
        };

        assert!(v.len() <= LIMIT, "{op:?} broke the limit");
        assert!(v.capacity() <= LIMIT, "{op:?} over-allocated");
        if !ok {
            assert_eq!(v, before, "{op:?} mutated on failure");
        }
        assert_eq!(v, model);
    }
}

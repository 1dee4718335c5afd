#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can check
// the arena and chain layout directly.

use crate::chained_hash_map::{ChainedHashMap, LOAD_FACTOR};
use crate::error::RemoveError;
use core::hash::{BuildHasher, Hasher};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Small key pool so that inserts, overwrites and removes hit the same keys.
#[derive(Clone, Debug)]
enum Op {
    Insert(i64, String),
    Remove(i64),
    Get(i64),
    Iterate,
}

fn arb_ops(key_range: i64) -> impl Strategy<Value = Vec<Op>> {
    let key = -key_range..key_range;
    let op = prop_oneof![
        4 => (key.clone(), "[ -~]{0,8}").prop_map(|(k, v)| Op::Insert(k, v)),
        2 => key.clone().prop_map(Op::Remove),
        2 => key.prop_map(Op::Get),
        1 => Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..200)
}

fn run_against_model<S>(sut: &mut ChainedHashMap<S>, ops: Vec<Op>) -> Result<(), TestCaseError>
where
    S: BuildHasher + Clone,
{
    let mut model: HashMap<i64, String> = HashMap::new();
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let prev = sut.insert(k, v.clone());
                prop_assert_eq!(prev, model.insert(k, v));
            }
            Op::Remove(k) => match (sut.remove(k), model.remove(&k)) {
                (Ok(got), Some(want)) => prop_assert_eq!(got, want),
                (Err(RemoveError::KeyNotFound { key }), None) => prop_assert_eq!(key, k),
                (got, want) => prop_assert!(false, "remove({}) = {:?}, model {:?}", k, got, want),
            },
            Op::Get(k) => {
                prop_assert_eq!(sut.get(k), model.get(&k).map(String::as_str));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            Op::Iterate => {
                let seen: BTreeMap<i64, String> =
                    sut.iter().map(|(k, v)| (k, v.to_string())).collect();
                let want: BTreeMap<i64, String> =
                    model.iter().map(|(k, v)| (*k, v.clone())).collect();
                prop_assert_eq!(sut.iter().count(), model.len());
                prop_assert_eq!(seen, want);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.len(), sut.chains.node_count());
        prop_assert!(sut.len() <= sut.bucket_count() * LOAD_FACTOR);
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// - insert returns the replaced value exactly when the model had one
// - remove succeeds exactly for present keys and returns the stored value
// - get/contains_key parity, iteration yields the model's entry set once
// - len tracks distinct keys and never exceeds the growth threshold
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops(24), buckets in 1usize..10) {
        let mut sut = ChainedHashMap::with_capacity(buckets);
        run_against_model(&mut sut, ops)?;
    }
}

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Property: same invariants with every key in bucket 0, so each op walks and
// splices one long chain.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions(ops in arb_ops(12)) {
        let mut sut = ChainedHashMap::with_hasher(ConstBuildHasher);
        run_against_model(&mut sut, ops)?;
        let heads = sut.chains.heads.iter().filter(|h| h.is_some()).count();
        prop_assert!(heads <= 1);
    }
}

// Property: doubling the bucket count never changes what a lookup returns.
proptest! {
    #[test]
    fn prop_resize_transparency(keys in proptest::collection::btree_set(any::<i64>(), 1..120)) {
        let mut m = ChainedHashMap::with_capacity(1);
        let mut buckets = m.bucket_count();
        for (i, &k) in keys.iter().enumerate() {
            m.insert(k, format!("v{}", i));
            if m.bucket_count() != buckets {
                prop_assert_eq!(m.bucket_count(), buckets * 2);
                buckets = m.bucket_count();
            }
            for (j, &prior) in keys.iter().take(i + 1).enumerate() {
                let expected = format!("v{}", j);
                prop_assert_eq!(m.get(prior), Some(expected.as_str()));
            }
        }
        prop_assert_eq!(m.len(), keys.len());
    }
}

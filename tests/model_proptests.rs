// Container property tests (consolidated).
//
// Property 1: BucketMap agrees with a std HashMap model.
//  - Model: std::collections::HashMap under the same op sequence.
//  - Invariant: len(), has_key(), get() match the model after every
//    op; after every put, used/bins <= load_threshold.
//  - Operations: put, erase, clear, get.
//
// Property 2: TreeMap agrees with a std BTreeMap model.
//  - Model: std::collections::BTreeMap; in-order iteration must equal
//    the model's sorted iteration exactly (order and pairs).
//  - Operations: put, erase, get_or_default.
//
// Property 3: HeapQueue drains a sorted permutation.
//  - Model: the multiset of enqueued values; extraction must be the
//    model sorted descending.
//
// Property 4: LinkedQueue agrees with a std VecDeque model.
//  - Model: VecDeque under lock-step enqueue/dequeue/clear.
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap, VecDeque};

use epoch_collections::{BucketMap, HeapQueue, LinkedQueue, TreeMap};

fn id_hash(k: &i64) -> i64 {
    *k
}

fn clustered_hash(k: &i64) -> i64 {
    // Collision-heavy on purpose: eight keys per hash value.
    *k / 8
}

fn int_lt(a: &i64, b: &i64) -> bool {
    a < b
}

fn int_gt(a: &i64, b: &i64) -> bool {
    a > b
}

proptest! {
    // Property 1, with both a spreading and a clustering hash.
    #[test]
    fn prop_bucket_map_matches_hashmap(
        clustered in proptest::bool::ANY,
        ops in proptest::collection::vec((0u8..=3u8, 0i64..64i64, -100i64..100i64), 1..200)
    ) {
        let hash: epoch_collections::KeyHash<i64> =
            if clustered { clustered_hash } else { id_hash };
        let mut m: BucketMap<i64, i64> = BucketMap::new(hash);
        let mut model: HashMap<i64, i64> = HashMap::new();

        for (op, k, v) in ops {
            match op {
                0 | 1 => {
                    prop_assert_eq!(m.put(k, v), model.insert(k, v));
                    // Load invariant after every put.
                    prop_assert!(m.len() as f64 / m.bins() as f64 <= 1.0 + f64::EPSILON);
                }
                2 => {
                    let expect = model.remove(&k);
                    prop_assert_eq!(m.erase(&k).ok(), expect);
                }
                3 => {
                    if v == 0 {
                        m.clear();
                        model.clear();
                    }
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(m.len(), model.len());
            prop_assert_eq!(m.has_key(&k), model.contains_key(&k));
            prop_assert_eq!(m.get(&k), model.get(&k));
        }

        // Every surviving pair is found, and iteration covers exactly
        // the model's pairs.
        let mut pairs: Vec<(i64, i64)> = m.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort_unstable();
        let mut expect: Vec<(i64, i64)> = model.into_iter().collect();
        expect.sort_unstable();
        prop_assert_eq!(pairs, expect);
    }
}

proptest! {
    // Property 2: sorted iteration parity with BTreeMap.
    #[test]
    fn prop_tree_map_matches_btreemap(
        ops in proptest::collection::vec((0u8..=2u8, 0i64..48i64, -100i64..100i64), 1..200)
    ) {
        let mut m: TreeMap<i64, i64> = TreeMap::new(int_lt);
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for (op, k, v) in ops {
            match op {
                0 => {
                    prop_assert_eq!(m.put(k, v), model.insert(k, v));
                }
                1 => {
                    let expect = model.remove(&k);
                    prop_assert_eq!(m.erase(&k).ok(), expect);
                }
                2 => {
                    let slot = m.get_or_default(k);
                    let model_slot = model.entry(k).or_default();
                    *slot += 1;
                    *model_slot += 1;
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(m.len(), model.len());
            // In-order iteration equals the model's sorted iteration.
            let got: Vec<(i64, i64)> = m.iter().map(|(k, v)| (*k, *v)).collect();
            let expect: Vec<(i64, i64)> = model.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(got, expect);
        }
    }
}

proptest! {
    // Property 3: heap extraction is the input sorted descending.
    #[test]
    fn prop_heap_extracts_sorted(values in proptest::collection::vec(-1000i64..1000i64, 0..200)) {
        let mut pq = HeapQueue::from_values(int_gt, values.clone());
        prop_assert_eq!(pq.len(), values.len());

        let mut out = Vec::with_capacity(values.len());
        while let Ok(v) = pq.dequeue() {
            out.push(v);
        }
        let mut expect = values;
        expect.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(out, expect);
    }
}

proptest! {
    // Property 3b: incremental enqueue preserves the same guarantee
    // as bulk heapify.
    #[test]
    fn prop_heap_incremental_equals_bulk(values in proptest::collection::vec(-50i64..50i64, 0..100)) {
        let mut incremental = HeapQueue::new(int_gt);
        incremental.enqueue_all(values.clone());
        let bulk = HeapQueue::from_values(int_gt, values);
        // Equality is by extraction order, so layout differences from
        // the two construction paths must not show through.
        prop_assert_eq!(incremental, bulk);
    }
}

proptest! {
    // Property 4: FIFO parity with VecDeque.
    #[test]
    fn prop_queue_matches_vecdeque(
        ops in proptest::collection::vec((0u8..=2u8, 0i64..1000i64), 1..200)
    ) {
        let mut q: LinkedQueue<i64> = LinkedQueue::new();
        let mut model: VecDeque<i64> = VecDeque::new();

        for (op, v) in ops {
            match op {
                0 | 1 => {
                    q.enqueue(v);
                    model.push_back(v);
                }
                2 => {
                    prop_assert_eq!(q.dequeue().ok(), model.pop_front());
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(q.len(), model.len());
            prop_assert_eq!(q.peek().ok(), model.front());
        }

        let seen: Vec<i64> = q.iter().copied().collect();
        let expect: Vec<i64> = model.into_iter().collect();
        prop_assert_eq!(seen, expect);
    }
}

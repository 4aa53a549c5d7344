use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeMap;

/// Multiset model: key -> live instances.
type Model = BTreeMap<Vec<u8>, usize>;

fn validate_trie<A: Alphabet>(t: &Trie<A>) {
    let mut stack = vec![t.cursor()];
    let mut live = 0usize;
    while let Some(c) = stack.pop() {
        assert!(c.pass() >= c.end(), "pass < end at {:?}", c.handle());
        if c.depth() > 0 {
            assert!(c.pass() > 0, "reachable node with pass 0 at {:?}", c.handle());
        }
        live += c.end();

        let mut below = 0;
        for slot in 0..A::WIDTH {
            if let Some(child) = c.step_slot(slot) {
                below += child.pass();
                stack.push(child);
            }
        }
        assert_eq!(
            c.pass(),
            c.end() + below,
            "pass must equal end plus children at {:?}",
            c.handle()
        );
    }
    assert_eq!(live, t.len(), "sum of end counts must match Trie::len");
}

fn model_prefix_count(m: &Model, prefix: &[u8]) -> usize {
    m.iter()
        .filter(|(k, _)| k.starts_with(prefix))
        .map(|(_, n)| *n)
        .sum()
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    // A narrow alphabet keeps shared prefixes and repeats frequent.
    prop::collection::vec(b'a'..=b'd', 0..=6)
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 3)]
    Delete(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(weight = 2)]
    PrefixCount(#[proptest(strategy = "key_strategy()")] Vec<u8>),
    #[proptest(skip)]
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        99 => any::<Op>(),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=300)
}

fn run_against_model(ops: Vec<Op>, reclaim: bool) -> Result<(), TestCaseError> {
    let config = TrieConfig::with_capacity(1 + 6 * 300).reclaim_severed(reclaim);
    let mut t: Trie<Lowercase> = Trie::with_config(config).unwrap();
    let mut m = Model::new();

    for op in ops {
        match op {
            Op::Insert(key) => {
                t.insert(&key).unwrap();
                *m.entry(key).or_default() += 1;
            }
            Op::Delete(key) => {
                let removed = t.delete(&key);
                let expected = match m.get_mut(&key) {
                    Some(n) => {
                        *n -= 1;
                        if *n == 0 {
                            m.remove(&key);
                        }
                        true
                    }
                    None => false,
                };
                prop_assert_eq!(removed, expected);
            }
            Op::Search(key) => {
                prop_assert_eq!(t.search(&key), m.get(&key).copied().unwrap_or(0));
            }
            Op::PrefixCount(key) => {
                prop_assert_eq!(t.prefix_count(&key), model_prefix_count(&m, &key));
            }
            Op::Clear => {
                t.clear();
                m.clear();
                prop_assert_eq!(t.nodes_in_use(), 1);
            }
        }
        prop_assert_eq!(t.len(), m.values().sum::<usize>());
    }

    validate_trie(&t);
    let got = t.keys_with_prefix("");
    let expected: Vec<(Vec<u8>, usize)> = m.into_iter().collect();
    prop_assert_eq!(got, expected);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        run_against_model(ops, false)?;
    }

    #[test]
    fn prop_equivalence_reclaiming(ops in ops_strategy()) {
        run_against_model(ops, true)?;
    }

    #[test]
    fn prop_prefix_monotone(keys in prop::collection::vec(key_strategy(), 0..50), query in key_strategy()) {
        let mut t: Trie<Lowercase> = Trie::new(1 + 6 * 50);
        for k in &keys {
            t.insert(k).unwrap();
        }
        for cut in 0..query.len() {
            prop_assert!(t.prefix_count(&query[..cut]) >= t.prefix_count(&query[..cut + 1]));
        }
        for k in &keys {
            prop_assert!(t.search(k) >= 1);
        }
    }

    #[test]
    fn prop_multiplicity(key in key_strategy(), n in 1usize..20) {
        let mut t: Trie<Lowercase> = Trie::new(8);
        for _ in 0..n {
            t.insert(&key).unwrap();
        }
        prop_assert_eq!(t.search(&key), n);
        for _ in 0..n {
            prop_assert!(t.delete(&key));
        }
        prop_assert_eq!(t.search(&key), 0);
        prop_assert!(!t.delete(&key));
        prop_assert!(t.is_empty());
    }

    #[test]
    fn prop_clear_matches_fresh(first in prop::collection::vec(key_strategy(), 0..30),
                                second in prop::collection::vec(key_strategy(), 0..30)) {
        let capacity = 1 + 6 * 30;
        let mut reused: Trie<Lowercase> = Trie::new(capacity);
        for k in &first {
            reused.insert(k).unwrap();
        }
        reused.clear();
        for k in &first {
            prop_assert_eq!(reused.search(k), 0);
        }

        let mut fresh: Trie<Lowercase> = Trie::new(capacity);
        for k in &second {
            reused.insert(k).unwrap();
            fresh.insert(k).unwrap();
        }
        prop_assert_eq!(reused.stats(), fresh.stats());
        prop_assert_eq!(reused.keys_with_prefix(""), fresh.keys_with_prefix(""));
    }

    #[test]
    fn prop_failed_insert_is_atomic(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut t: Trie<Lowercase> = Trie::new(12);
        for k in &keys {
            let before = t.keys_with_prefix("");
            let stats = t.stats();
            if t.insert(k).is_err() {
                prop_assert_eq!(t.keys_with_prefix(""), before);
                prop_assert_eq!(t.stats(), stats);
            }
        }
        validate_trie(&t);
    }
}

#[test]
fn digits_and_binary_validate() {
    let mut d: Trie<Digits> = Trie::new(64);
    for n in ["911", "9112", "97625999", "911", ""] {
        d.insert(n).unwrap();
    }
    assert!(d.delete("9112"));
    validate_trie(&d);

    let mut b: Trie<Binary> = Trie::new(1 + 8 * 16);
    for v in 0..16u32 {
        b.insert(Binary::key(v * 13, 8)).unwrap();
    }
    for v in (0..16u32).step_by(3) {
        assert!(b.delete(Binary::key(v * 13, 8)));
    }
    validate_trie(&b);
    assert_eq!(b.len(), 10);
}

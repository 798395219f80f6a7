use super::*;

use itertools::Itertools;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Every node below the root must hold a value or lead to one.
fn validate_trie<V>(t: &Trie<V>) {
    let Some(root) = t.root() else {
        return;
    };
    assert!(!root.is_dead(), "dead root must be dropped");

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        for child in node.children.values() {
            assert!(!child.is_dead(), "dead node left reachable");
            stack.push(child);
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Put(String, u16),
    Delete(String),
    Get(String),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // a narrow alphabet makes shared prefixes likely
    "[abé]{0,6}"
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => (key.clone(), any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        30 => key.clone().prop_map(Op::Delete),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=300)
}

fn char_len(key: &str) -> usize {
    key.chars().count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t: Trie<u16> = Trie::new();
        let mut m: BTreeMap<String, u16> = BTreeMap::new();
        let mut len = 0usize;

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    let old_t = t.put(&key, value);
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                    len += 1;
                }
                Op::Delete(key) => {
                    let old_t = t.delete(&key);
                    let old_m = m.remove(&key);
                    prop_assert_eq!(old_t, old_m);
                    if old_m.is_some() {
                        len -= 1;
                    }
                    prop_assert!(!t.contains(&key));
                }
                Op::Get(key) => {
                    let got_t = t.get(&key).ok().copied();
                    let got_m = m.get(&key).copied();
                    prop_assert_eq!(got_t, got_m);
                    prop_assert_eq!(t.contains(&key), got_m.is_some());
                }
            }

            prop_assert_eq!(t.len(), len);
        }

        validate_trie(&t);
        let got = t.iter().map(|leaf| (leaf.key().to_owned(), *leaf)).sorted().collect_vec();
        let expected = m.iter().map(|(k, v)| (k.clone(), *v)).collect_vec();
        prop_assert_eq!(got, expected);

        let depth = m.keys().map(|key| char_len(key)).max().unwrap_or(0);
        prop_assert_eq!(t.depth(), depth);
        prop_assert_eq!(t.stats().keys, m.len());
    }

    #[test]
    fn prop_fresh_inserts_are_counted(keys in prop::collection::btree_set(key_strategy(), 0..50)) {
        let t: Trie<()> = keys.iter().map(|key| (key, ())).collect();
        prop_assert_eq!(t.len(), keys.len());
        prop_assert_eq!(t.keys().into_iter().sorted().collect_vec(), keys.into_iter().collect_vec());
    }

    #[test]
    fn prop_prefix_containment(
        keys in prop::collection::btree_set(key_strategy(), 0..50),
        prefix in "[abé]{0,3}",
    ) {
        let t: Trie<()> = keys.iter().map(|key| (key, ())).collect();
        let got = t.keys_with_prefix(&prefix).into_iter().sorted().collect_vec();
        let expected = keys.iter().filter(|key| key.starts_with(&prefix)).cloned().collect_vec();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_fuzzy_matches_exact_length(
        keys in prop::collection::btree_set(key_strategy(), 0..50),
        pattern in "[abé.]{0,6}",
    ) {
        let t: Trie<()> = keys.iter().map(|key| (key, ())).collect();
        let got = t.keys_with_fuzzy_match(&pattern).into_iter().sorted().collect_vec();
        let expected = keys
            .iter()
            .filter(|key| {
                char_len(key) == char_len(&pattern)
                    && key.chars().zip(pattern.chars()).all(|(k, p)| p == WILDCARD || k == p)
            })
            .cloned()
            .collect_vec();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_longest_prefix_follows_paths(
        keys in prop::collection::btree_set(key_strategy(), 0..50),
        query in "[abé]{0,8}",
    ) {
        let t: Trie<()> = keys.iter().map(|key| (key, ())).collect();
        let expected = (0..=char_len(&query))
            .rev()
            .map(|n| query.chars().take(n).collect::<String>())
            .find(|candidate| candidate.is_empty() || keys.iter().any(|key| key.starts_with(candidate.as_str())))
            .unwrap_or_default();
        prop_assert_eq!(t.longest_prefix(&query), expected);
    }
}

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use rand::{seq::SliceRandom, thread_rng, Rng};
use record_sort::{
    new_record_tree, sorts::tree_sort_avl, tree_delete, tree_insert, AvlTree, CompareConfig, Criterion,
    DefaultAvlTree, DuplicatePolicy, NaturalOrder, Record, RecordComparator, Stat,
    TreeOptions,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn tree() -> DefaultAvlTree<i32> {
    AvlTree::with_options(NaturalOrder::new(), TreeOptions::default().verified())
}

#[test]
fn ascending_triple_rotates_left_once() {
    init();
    let mut t = tree();
    let mut stat = Stat::new();
    t.insert(10, &mut stat);
    t.insert(20, &mut stat);
    assert_eq!(t.get_stats().rotations(), 0);
    t.insert(30, &mut stat);

    assert_eq!(t.get_stats().left_rotations, 1);
    assert_eq!(t.get_stats().right_rotations, 0);
    assert_eq!(
        format!("{t:?}"),
        "AvlTree size 3 height 2\n\
         20 height 2 balance 0\n  \
         10 height 1 balance 0\n  \
         30 height 1 balance 0\n"
    );
}

#[test]
fn deleting_root_promotes_right_minimum() {
    let mut t = tree();
    let mut stat = Stat::new();
    for k in [20, 10, 30] {
        t.insert(k, &mut stat);
    }
    assert_eq!(t.remove(&20, &mut stat), Some(20));
    assert_eq!(t.root(), Some(&30));
    assert_eq!(t.height(), 2);
    assert_eq!(t.to_vec(), vec![10, 30]);
    assert!(t.validate().is_ok());
}

#[test]
fn two_child_delete_deep_in_tree() {
    let mut t = tree();
    let mut stat = Stat::new();
    for k in 1..=31 {
        t.insert(k, &mut stat);
    }
    // interior nodes with two children, including the root
    for k in [16, 8, 24, 4, 12] {
        assert_eq!(t.remove(&k, &mut stat), Some(k));
        assert!(t.validate().is_ok());
    }
    assert_eq!(t.len(), 26);
    assert_eq!(t.first(), Some(&1));
    assert_eq!(t.last(), Some(&31));
}

#[test]
fn empty_tree_operations_are_noops() {
    let mut t = tree();
    let mut stat = Stat::new();
    assert!(t.is_empty());
    assert_eq!(t.height(), 0);
    assert_eq!(t.remove(&1, &mut stat), None);
    assert_eq!(t.search(&1, &mut stat), None);
    assert_eq!(stat, Stat::new());
    assert_eq!(t.iter().count(), 0);
    assert!(t.validate().is_ok());
}

#[test]
fn sorted_insert_stays_logarithmic() {
    let mut t = DefaultAvlTree::new(NaturalOrder::new());
    let mut stat = Stat::new();
    let n = 1 << 14;
    for k in 0..n {
        t.insert(k, &mut stat);
    }
    // perfectly balanced except the last level
    assert!(t.height() <= 15);
    assert!(t.validate().is_ok());
    assert!(t.iter().copied().eq(0..n));
}

#[test]
fn right_policy_keeps_duplicates_in_insertion_order() {
    let by_category = RecordComparator::new(CompareConfig::ascending(Criterion::Category));
    let mut t = AvlTree::with_options(by_category, TreeOptions::new(DuplicatePolicy::Right).verified());
    let mut stat = Stat::new();
    for (i, c) in "FMFFMMFMFF".chars().enumerate() {
        assert!(t.insert(Record::new(i as i32, "n", c, [0; 3]), &mut stat));
    }
    assert_eq!(t.len(), 10);
    let order: Vec<(char, i32)> = t.iter().map(|r| (r.category, r.id)).collect();
    let mut expected = order.clone();
    expected.sort();
    assert_eq!(order, expected);
}

#[test]
fn record_index_by_identifier() {
    let mut t = new_record_tree(CompareConfig::descending(Criterion::Identifier));
    for id in [5, 3, 9, 1, 7] {
        assert!(tree_insert(&mut t, Record::new(id, "r", 'M', [id, 0, 0])).0);
    }
    let ids: Vec<i32> = t.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 7, 5, 3, 1]);
    let (removed, _) = tree_delete(&mut t, &Record::probe(9));
    assert_eq!(removed.map(|r| r.scores[0]), Some(9));
    assert!(t.validate().is_ok());
}

#[test]
fn tree_sort_matches_insert_then_extract() {
    let mut rng = thread_rng();
    let mut keys: Vec<i32> = (0..3000).collect();
    keys.shuffle(&mut rng);

    let mut sorted = keys.clone();
    let mut stat = Stat::new();
    tree_sort_avl(&mut sorted, &NaturalOrder::new(), &mut stat);

    let mut t = DefaultAvlTree::new(NaturalOrder::new());
    for &k in &keys {
        t.insert(k, &mut stat);
    }
    let mut extracted = vec![0; keys.len()];
    assert_eq!(t.extract_in_order(&mut extracted, &mut stat), keys.len());
    assert_eq!(sorted, extracted);
    assert_eq!(sorted, t.to_vec());
}

#[test]
fn random_op_test() {
    init();
    let mut t = DefaultAvlTree::new(NaturalOrder::new());
    let mut stat = Stat::new();
    let n = 5000;
    let mut rng = thread_rng();

    let mut keys = HashSet::new();
    while keys.len() < n {
        keys.insert(rng.gen::<u16>() as i32);
    }
    let mut keys: Vec<_> = keys.into_iter().collect();

    for &key in keys.iter() {
        assert!(t.insert(key, &mut stat));
    }
    for &key in keys.iter() {
        assert_eq!(t.search(&key, &mut stat), Some(&key));
    }

    keys.shuffle(&mut rng);
    let removed_keys = keys.split_off(n / 2);
    for &key in removed_keys.iter() {
        assert_eq!(t.remove(&key, &mut stat), Some(key));
    }
    for &key in removed_keys.iter() {
        assert!(t.search(&key, &mut stat).is_none());
    }
    for &key in keys.iter() {
        assert_eq!(t.search(&key, &mut stat), Some(&key));
    }
    assert_eq!(t.len(), n / 2);
    assert!(t.validate().is_ok());
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u8),
    Remove(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u8>().prop_map(Op::Insert), any::<u8>().prop_map(Op::Remove)]
}

proptest! {
    #[test]
    fn matches_btreeset_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let mut t = DefaultAvlTree::new(NaturalOrder::<u8>::new());
        let mut model = BTreeSet::new();
        let mut stat = Stat::new();
        for op in ops {
            match op {
                Op::Insert(k) => {
                    prop_assert_eq!(t.insert(k, &mut stat), model.insert(k));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(t.remove(&k, &mut stat).is_some(), model.remove(&k));
                }
            }
            prop_assert_eq!(t.validate(), Ok(()));
        }
        prop_assert!(t.iter().eq(model.iter()));
        prop_assert_eq!(t.len(), model.len());
    }
}

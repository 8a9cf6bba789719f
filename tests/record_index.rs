use std::collections::HashSet;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use record_sort::{
    new_record_tree, AvlTree, CompareConfig, Criterion, NaturalOrder, Record, RecordComparator, RecordIndex,
    SortedArray, Stat, UnsortedArray,
};

type Index = Box<dyn RecordIndex<u32>>;

fn containers() -> Vec<(&'static str, Index)> {
    let unsorted: Index = Box::new(UnsortedArray::new(NaturalOrder::new()));
    let sorted: Index = Box::new(SortedArray::new(NaturalOrder::new()));
    let avl: Index = Box::new(AvlTree::new(NaturalOrder::new()));
    vec![("unsorted", unsorted), ("sorted", sorted), ("avl", avl)]
}

#[test]
fn containers_agree_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut indexes = containers();
    let mut model = HashSet::new();

    for _ in 0..4000 {
        let key = rng.gen_range(0..600u32);
        match rng.gen_range(0..3) {
            0 if !model.contains(&key) => {
                model.insert(key);
                for (name, index) in indexes.iter_mut() {
                    assert!(index.insert(key, &mut Stat::new()), "{name}");
                }
            }
            1 => {
                let expected = model.remove(&key).then_some(key);
                for (name, index) in indexes.iter_mut() {
                    assert_eq!(index.remove(&key, &mut Stat::new()), expected, "{name}");
                }
            }
            _ => {
                for (name, index) in indexes.iter() {
                    let found = index.search(&key, &mut Stat::new()).copied();
                    assert_eq!(found, model.contains(&key).then_some(key), "{name}");
                }
            }
        }
        for (name, index) in indexes.iter() {
            assert_eq!(index.len(), model.len(), "{name}");
        }
    }
}

#[test]
fn search_cost_ordering() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut records: Vec<Record> = (0..4096).map(|id| Record::new(id, "s", 'M', [0; 3])).collect();
    records.shuffle(&mut rng);
    let by_id = RecordComparator::new(CompareConfig::ascending(Criterion::Identifier));

    let unsorted = UnsortedArray::from_vec(records.clone(), by_id);
    let sorted = SortedArray::from_vec(records.clone(), by_id, &mut Stat::new());
    let mut tree = new_record_tree(by_id.config());
    for r in &records {
        tree.insert(*r, &mut Stat::new());
    }

    let mut linear = Stat::new();
    let mut binary = Stat::new();
    let mut avl = Stat::new();
    for id in (0..4096).step_by(97) {
        let key = Record::probe(id);
        assert!(unsorted.search(&key, &mut linear).is_some());
        assert!(sorted.search(&key, &mut binary).is_some());
        assert!(tree.search(&key, &mut avl).is_some());
    }
    assert!(binary.comparisons < linear.comparisons);
    assert!(avl.comparisons < linear.comparisons);
    assert_eq!(linear.memory_ops + binary.memory_ops + avl.memory_ops, 0);
}

#[test]
fn empty_containers() {
    for (name, mut index) in containers() {
        let mut stat = Stat::new();
        assert!(index.is_empty(), "{name}");
        assert_eq!(index.search(&1, &mut stat), None, "{name}");
        assert_eq!(index.remove(&1, &mut stat), None, "{name}");
        assert_eq!(stat, Stat::new(), "{name}");
    }
}

use avl_collections::avl_tree::AvlSet;
use log::LevelFilter;
use rand::Rng;
use simplelog::{Config, SimpleLogger};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;

fn init_logger() {
    let _ = SimpleLogger::init(LevelFilter::Info, Config::default());
}

fn max_height(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2()
}

#[test]
fn int_test_avl_set_random_operations() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1000);

        if rng.gen_range(0, 3) == 0 {
            assert_eq!(set.remove(&key), expected.take(&key));
            assert!(!set.contains(&key));
        } else {
            assert_eq!(set.insert(key), expected.insert(key));
            assert!(set.contains(&key));
        }

        assert_eq!(set.check(), Ok(()));
        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(
        set.traverse(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    for key in 0..1000 {
        assert_eq!(set.contains(&key), expected.contains(&key));
    }
}

#[test]
fn int_test_avl_set_height_bound() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        set.insert(rng.next_u32());
        assert!((set.height() as f64) <= max_height(set.len()));
    }

    let mut ascending = AvlSet::new();
    for key in 0..NUM_OF_OPERATIONS {
        ascending.insert(key);
        assert!((ascending.height() as f64) <= max_height(ascending.len()));
    }
    assert_eq!(ascending.check(), Ok(()));
}

#[test]
fn int_test_avl_set_remove_all() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut keys: Vec<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
    let mut set: AvlSet<u32> = keys.iter().cloned().collect();

    for i in (1..keys.len()).rev() {
        let j = rng.gen_range(0, i + 1);
        keys.swap(i, j);
    }

    for key in &keys {
        assert_eq!(set.remove(key), Some(*key));
        assert_eq!(set.remove(key), None);
        assert!(!set.contains(key));
        assert_eq!(set.check(), Ok(()));
    }

    assert!(set.is_empty());
    assert_eq!(set.height(), 0);
    assert!(set.traverse().is_empty());
}

#[test]
fn int_test_avl_set_duplicate_insert() {
    init_logger();
    let keys = [8, 3, 10, 1, 6, 14, 4, 7, 13];
    let once: AvlSet<u32> = keys.iter().cloned().collect();
    let mut twice = AvlSet::new();
    for key in keys.iter() {
        twice.insert(*key);
        twice.insert(*key);
    }

    assert_eq!(once.traverse(), twice.traverse());
    assert_eq!(once.height(), twice.height());
    assert_eq!(once.len(), twice.len());
}

#[test]
fn int_test_avl_set_iterators_agree() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = AvlSet::new();
    for _ in 0..NUM_OF_OPERATIONS {
        set.insert(rng.gen::<u32>());
    }

    let traversed: Vec<u32> = set.traverse().into_iter().cloned().collect();
    let iterated: Vec<u32> = set.iter().cloned().collect();
    assert_eq!(traversed, iterated);
    assert!(traversed.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(set.min(), traversed.first());
    assert_eq!(set.max(), traversed.last());
    assert_eq!(set.into_iter().collect::<Vec<u32>>(), traversed);
}

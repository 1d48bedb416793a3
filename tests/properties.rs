use bucketmap::{Config, Error, GrowableMap};
use proptest::{collection, prelude::*};
use std::collections::HashMap;

proptest! {
    #[test]
    fn distinct_keys_round_trip(items in collection::hash_map(any::<u32>(), any::<i64>(), 0..300)) {
        let mut map = GrowableMap::new();
        for (&key, &value) in &items {
            prop_assert_eq!(map.add(key, value), None);
        }

        prop_assert_eq!(map.size(), items.len());
        for (key, value) in &items {
            prop_assert_eq!(map.get(key), Ok(value));
        }
    }

    #[test]
    fn behaves_like_std_hash_map(ops in collection::vec((any::<u8>(), any::<u32>()), 0..500)) {
        let mut map = GrowableMap::new();
        let mut model = HashMap::new();

        for (key, value) in ops {
            prop_assert_eq!(map.add(key, value), model.insert(key, value));
            prop_assert_eq!(map.size(), model.len());
            prop_assert!(map.size() <= map.capacity());
        }

        for key in 0..=u8::MAX {
            match model.get(&key) {
                Some(value) => {
                    prop_assert_eq!(map.get(&key), Ok(value));
                }
                None => {
                    prop_assert_eq!(map.get(&key), Err(Error::KeyNotFound));
                }
            }
        }
    }

    #[test]
    fn absent_keys_are_not_found(
        keys in collection::hash_set(0u32..1000, 0..200),
        probe in 1000u32..2000,
    ) {
        let mut map = GrowableMap::new();
        map.extend(keys.iter().map(|&key| (key, ())));

        prop_assert_eq!(map.get(&probe), Err(Error::KeyNotFound));
        prop_assert!(!map.contains(&probe));
    }

    #[test]
    fn geometric_growth_bounds_total_work(
        n in 1usize..5000,
        initial_capacity in 1usize..16,
        growth_factor in 2usize..5,
    ) {
        let config = Config::new().initial_capacity(initial_capacity).growth_factor(growth_factor);
        let mut map = GrowableMap::with_config(config).unwrap();
        for i in 0..n {
            map.add(i, i);
        }

        let stats = map.stats();
        prop_assert_eq!(stats.adds, n);
        prop_assert!(stats.work() <= 3 * n, "work {} for {} adds", stats.work(), n);
    }
}

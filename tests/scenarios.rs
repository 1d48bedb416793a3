use bucketmap::{Error, GrowableMap, OccupancyReport};

#[test]
fn three_adds_with_one_resize() {
    let mut map = GrowableMap::with_capacity(2).unwrap();
    map.add("a", 1);
    map.add("b", 2);
    map.add("c", 3);

    assert_eq!(map.get(&"b"), Ok(&2));
    assert_eq!(map.size(), 3);
    assert_eq!(map.get(&"z"), Err(Error::KeyNotFound));
    assert_eq!(map.capacity(), 4);
}

#[test]
fn eight_letters_double_twice() {
    let mut map = GrowableMap::with_capacity(2).unwrap();
    for (i, c) in ["a", "b", "c", "d", "e", "f", "g", "h"].into_iter().enumerate() {
        map.add(c.to_string(), i);
    }

    assert_eq!(map.size(), 8);
    assert!(map.capacity() >= 8);
    assert!(map.stats().resizes >= 2);
    for (i, c) in ["a", "b", "c", "d", "e", "f", "g", "h"].into_iter().enumerate() {
        assert_eq!(map.get(c), Ok(&i));
    }
}

#[test]
fn keys_survive_every_resize_boundary() {
    let mut map = GrowableMap::new();
    let mut added = 0u32;

    for exp in 1..=10 {
        let target = 1u32 << exp;
        while added < target {
            map.add(added, added.to_string());
            added += 1;
        }

        assert_eq!(map.size(), target as usize);
        for key in 0..added {
            assert_eq!(map.get(&key), Ok(&key.to_string()), "key {key} lost at size {target}");
        }
    }
}

#[test]
fn amortized_cost_stays_flat() {
    let mut map = GrowableMap::new();
    let mut previous_work = 0;

    for exp in 1..=16 {
        let n = 1usize << exp;
        while map.size() < n {
            map.add(map.size(), ());
        }

        let work = map.stats().work();
        assert_eq!(work, 2 * n - 2);
        assert!(map.stats().work_per_add() < 2.0);
        if exp > 1 {
            assert!(
                work <= 2 * previous_work + 2,
                "work({n}) = {work}, work({}) = {previous_work}",
                n / 2
            );
        }
        previous_work = work;
    }
}

#[test]
fn alphabet_spreads_over_buckets() {
    let map: GrowableMap<_, _> = ('a'..='z').zip(0..).collect();

    assert_eq!(map.get(&'x'), Ok(&23));
    let report = OccupancyReport::of(map.buckets());
    assert_eq!(report.entries(), 26);
    // 26 keys over 32 buckets: a bucket scan stays short
    assert!(report.longest() < 26);
    assert_eq!(map.iter().count(), 26);
}

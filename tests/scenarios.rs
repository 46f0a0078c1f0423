use rustc_hash::FxHashMap;
use vessels::algo::{map_keys, map_values};
use vessels::{DequeError, RingDeque, DEFAULT_CAPACITY};

#[test]
fn growth_on_the_fourth_push() {
    let mut deque = RingDeque::with_capacity(4);
    deque.push_back(1);
    deque.push_back(2);
    deque.push_back(3);
    assert_eq!(deque.len(), 3);
    assert_eq!(deque.capacity(), 4);

    deque.push_back(4);
    assert_eq!(deque.capacity(), 8);
    assert_eq!(deque.len(), 4);

    let drained: Vec<_> = (0..4).map(|_| deque.pop_front().unwrap()).collect();
    assert_eq!(drained, [1, 2, 3, 4]);
}

#[test]
fn last_pushed_front_comes_first() {
    let mut deque = RingDeque::with_capacity(4);
    deque.push_front(1);
    deque.push_front(2);

    assert_eq!(deque.pop_front(), Ok(2));
    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.pop_front(), Err(DequeError::EmptyCollection));
}

#[test]
fn shrink_settles_at_the_floor() {
    let mut deque = RingDeque::with_capacity(32);
    for i in 0..40 {
        deque.push_back(i);
    }
    assert_eq!(deque.capacity(), 64);

    // 40 elements need 41 slots
    deque.shrink();
    assert_eq!(deque.capacity(), 64);

    while deque.len() > 5 {
        deque.pop_back().unwrap();
    }
    for _ in 0..8 {
        deque.shrink();
    }
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert_eq!(deque, [0, 1, 2, 3, 4]);
}

#[test]
fn wraparound_across_many_cycles() {
    let mut deque = RingDeque::with_capacity(8);
    let mut next = 0;
    let mut expected = 0;

    for _ in 0..1000 {
        for _ in 0..5 {
            deque.push_back(next);
            next += 1;
        }
        for _ in 0..5 {
            assert_eq!(deque.pop_front(), Ok(expected));
            expected += 1;
        }
    }

    assert!(deque.is_empty());
    assert_eq!(deque.capacity(), 8);
}

#[test]
fn map_helpers_on_hash_maps() {
    let mut map = FxHashMap::default();
    map.insert("gamma", 3);
    map.insert("alpha", 1);
    map.insert("beta", 2);

    let mut keys = map_keys(&map);
    keys.sort_unstable();
    assert_eq!(keys, ["alpha", "beta", "gamma"]);

    let mut values = map_values(&map);
    values.sort_unstable();
    assert_eq!(values, [1, 2, 3]);

    let queue: RingDeque<_> = keys.iter().map(|k| map[k]).collect();
    assert_eq!(queue, [1, 2, 3]);
}

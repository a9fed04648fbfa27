//! Property-based tests for key-value expiry semantics.
//!
//! For any value, TTL and read time, a read returns the value exactly when the
//! read happens no later than the expiry instant, and an expired read leaves
//! no physical entry behind.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use proptest::prelude::*;
use winstate::services::backing_store::MemoryBackingStore;
use winstate::services::kv_store::{Clock, KvStore};

#[derive(Clone)]
struct ManualClock(Rc<Cell<i64>>);

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.get()
    }
}

proptest! {
    #[test]
    fn prop_read_within_ttl_returns_value(
        key in "[a-z]{1,12}",
        value in prop::collection::vec(any::<i32>(), 0..8),
        ttl_ms in 1u64..100_000,
        elapsed_fraction in 0.0f64..=1.0,
    ) {
        let clock = ManualClock(Rc::new(Cell::new(1_700_000_000_000)));
        let mut store = KvStore::with_clock(MemoryBackingStore::new(), "p:", Box::new(clock.clone()));

        store.set(&key, &value, Some(Duration::from_millis(ttl_ms)));
        let elapsed = (ttl_ms as f64 * elapsed_fraction).floor() as i64;
        clock.0.set(clock.0.get() + elapsed);

        prop_assert_eq!(store.get::<Vec<i32>>(&key, None), Some(value));
    }

    #[test]
    fn prop_read_after_ttl_misses_and_purges(
        key in "[a-z]{1,12}",
        value in any::<i64>(),
        ttl_ms in 1u64..100_000,
        overshoot in 1i64..100_000,
    ) {
        let clock = ManualClock(Rc::new(Cell::new(1_700_000_000_000)));
        let mut store = KvStore::with_clock(MemoryBackingStore::new(), "p:", Box::new(clock.clone()));

        store.set(&key, &value, Some(Duration::from_millis(ttl_ms)));
        clock.0.set(clock.0.get() + ttl_ms as i64 + overshoot);

        prop_assert_eq!(store.get(&key, Some(-1i64)), Some(-1));
        prop_assert!(store.backing().is_empty());
    }

    #[test]
    fn prop_remove_twice_equals_once(
        keys in prop::collection::vec("[a-z]{1,6}", 1..10),
        victim in 0usize..10,
    ) {
        let mut once = KvStore::new(MemoryBackingStore::new(), "");
        let mut twice = KvStore::new(MemoryBackingStore::new(), "");
        for k in &keys {
            once.set(k, &true, None);
            twice.set(k, &true, None);
        }
        let victim = &keys[victim % keys.len()];
        once.remove(victim);
        twice.remove(victim);
        twice.remove(victim);

        prop_assert_eq!(once.backing().len(), twice.backing().len());
        prop_assert_eq!(twice.get::<bool>(victim, None), None);
    }
}

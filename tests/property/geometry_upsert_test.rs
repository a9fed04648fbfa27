//! Property-based tests for geometry upserts.
//!
//! For any interleaving of saves across window ids, the stored list holds one
//! record per id in first-save order, each equal to that id's latest save.

use std::collections::HashMap;

use proptest::prelude::*;
use winstate::services::backing_store::MemoryBackingStore;
use winstate::services::geometry_store::{GeometryStore, GeometryStoreTrait};
use winstate::services::kv_store::KvStore;
use winstate::types::window::WindowState;

fn arb_state() -> impl Strategy<Value = WindowState> {
    (
        prop::sample::select(vec!["a", "b", "c", "d"]),
        -5000i32..5000,
        -5000i32..5000,
        100i32..4000,
        100i32..4000,
        any::<[bool; 4]>(),
    )
        .prop_map(|(id, x, y, width, height, flags)| WindowState {
            id: id.to_string(),
            name: format!("{}-window", id),
            width,
            height,
            x,
            y,
            is_maximized: flags[0],
            is_minimized: flags[1],
            is_fullscreen: flags[2],
            always_on_top: flags[3],
        })
}

proptest! {
    #[test]
    fn prop_upsert_keeps_one_latest_record_per_id(saves in prop::collection::vec(arb_state(), 1..40)) {
        let mut store = GeometryStore::new(KvStore::new(MemoryBackingStore::new(), "g:"));

        let mut first_seen: Vec<String> = Vec::new();
        let mut latest: HashMap<String, WindowState> = HashMap::new();
        for state in saves {
            if !first_seen.contains(&state.id) {
                first_seen.push(state.id.clone());
            }
            latest.insert(state.id.clone(), state.clone());
            store.save(state);
        }

        let stored = store.all();
        let stored_ids: Vec<String> = stored.iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(stored_ids, first_seen);
        for state in &stored {
            prop_assert_eq!(Some(state), latest.get(&state.id));
        }
    }

    #[test]
    fn prop_saving_one_id_never_touches_another(
        other in arb_state(),
        updates in prop::collection::vec(arb_state(), 1..20),
    ) {
        let mut store = GeometryStore::new(KvStore::new(MemoryBackingStore::new(), "g:"));
        let pinned = WindowState { id: "pinned".to_string(), ..other };
        store.save(pinned.clone());

        for update in updates {
            store.save(update);
        }

        let stored = store.all();
        prop_assert_eq!(&stored[0], &pinned);
        prop_assert_eq!(store.load("pinned"), Some(pinned));
    }
}

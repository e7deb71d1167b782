//! Registry shared between loader threads.

use std::collections::BTreeMap;
use std::sync::Arc;

use entity_defs::{EntityType, LoaderError};
use parking_lot::Mutex;

use crate::handler::DefHandler;
use crate::registry::DefRegistry;

/// A [`DefRegistry`] behind one lock.
///
/// Each operation holds the lock for its whole duration, so a batch is
/// assigned a contiguous run of identifiers even when several threads load
/// at once.
pub struct SharedRegistry<H: DefHandler> {
    inner: Arc<Mutex<DefRegistry<H>>>,
}

impl<H: DefHandler> SharedRegistry<H> {
    pub fn new(registry: DefRegistry<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn fill_builtin(&self) {
        self.inner.lock().fill_builtin();
    }

    pub fn load(&self, batch: BTreeMap<String, H::Def>) -> Vec<LoaderError> {
        self.inner.lock().load(batch)
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn next_type(&self) -> EntityType {
        self.inner.lock().next_type()
    }

    /// Run `f` with the registry locked.
    pub fn with<R>(&self, f: impl FnOnce(&DefRegistry<H>) -> R) -> R {
        f(&*self.inner.lock())
    }
}

impl<H: DefHandler> Clone for SharedRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemDef;
    use crate::registry::tests::ore_registry;
    use std::thread;

    #[test]
    fn test_parallel_batches_get_contiguous_runs() {
        let shared = SharedRegistry::new(ore_registry());
        shared.fill_builtin();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let batch: BTreeMap<String, ItemDef> = (0..8)
                        .map(|i| {
                            (
                                format!("T{t}Item{i}"),
                                ItemDef::new("").with_texture("gold.png"),
                            )
                        })
                        .collect();
                    shared.load(batch)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_empty());
        }

        assert_eq!(shared.next_type(), EntityType(5 + 32));
        shared.with(|registry| {
            for t in 0..4 {
                let mut ids: Vec<i32> = (0..8)
                    .map(|i| {
                        registry
                            .get_by_name(&format!("T{t}Item{i}"))
                            .unwrap()
                            .entity_type
                            .get()
                    })
                    .collect();
                ids.sort();
                assert_eq!(ids[7] - ids[0], 7, "batch {t} was interleaved");
            }
        });
    }

    #[test]
    fn test_shared_reset() {
        let shared = SharedRegistry::new(ore_registry());
        shared.fill_builtin();
        let _ = shared.load(BTreeMap::from([(
            "Gold".to_string(),
            ItemDef::new("").with_texture("gold.png"),
        )]));
        assert_eq!(shared.next_type(), EntityType(6));

        shared.reset();
        assert_eq!(shared.next_type(), EntityType(5));
        assert!(shared.with(|registry| registry.is_empty()));
    }
}

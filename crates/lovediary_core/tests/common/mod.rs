#![allow(dead_code)]

use lovediary_core::{MemoryStore, Store, StoreError, StoreResult};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Memory store that counts calls and can be told to fail.
#[derive(Default)]
pub struct ProbeStore {
    pub inner: MemoryStore,
    pub sets: AtomicUsize,
    pub deletes: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl ProbeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

impl Store for ProbeStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read refused".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write refused".to_string()));
        }
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("delete refused".to_string()));
        }
        self.inner.delete(key)
    }
}

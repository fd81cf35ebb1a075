use std::sync::Arc;

use parking_lot::Mutex;

/// Single-entry memo cache keyed on value equality.
///
/// Recomputes only when the inputs differ from the previous call. When a
/// recomputation yields a value equal to the cached one, the cached `Arc`
/// is handed out again so consumers can compare results with
/// [`Arc::ptr_eq`].
#[derive(Debug)]
pub struct Memo<I, O> {
    cache: Mutex<Option<(I, Arc<O>)>>,
}

impl<I, O> Default for Memo<I, O> {
    fn default() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }
}

impl<I: PartialEq, O: PartialEq> Memo<I, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&self, inputs: I, compute: impl FnOnce(&I) -> O) -> Arc<O> {
        let mut cache = self.cache.lock();

        if let Some((cached_inputs, cached)) = cache.as_ref() {
            if *cached_inputs == inputs {
                return Arc::clone(cached);
            }
        }

        let fresh = compute(&inputs);
        let output = match cache.take() {
            Some((_, cached)) if *cached == fresh => cached,
            _ => Arc::new(fresh),
        };
        *cache = Some((inputs, Arc::clone(&output)));
        output
    }

    /// Forget the cached entry
    pub fn reset(&self) {
        *self.cache.lock() = None;
    }
}

//! Reuse of parse buffers across requests.
//!
//! [`Input`](crate::Input) and [`Document`](crate::Document) keep their
//! allocated capacity when reset, so a long-running service can parse many
//! documents while allocating only when a document is bigger than any seen
//! before. A [`Pool`] hands out such buffers to concurrent callers.

use parking_lot::Mutex;
use std::ops::Deref;
use std::ops::DerefMut;

/// Returns a value to its empty state without releasing its capacity.
pub trait Reset {
    fn reset(&mut self);
}

/// A thread-safe pool of reusable values.
///
/// Values are created on demand by the pool's factory and reset when their
/// [`Pooled`] guard is dropped.
pub struct Pool<T: Reset> {
    idle: Mutex<Vec<T>>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T: Reset> Pool<T> {
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            factory: Box::new(factory),
        }
    }

    /// Takes an idle value, or creates one if none is idle.
    pub fn acquire(&self) -> Pooled<'_, T> {
        let reused = self.idle.lock().pop();
        let value = reused.unwrap_or_else(|| {
            log::debug!("pool is empty, creating a new value");
            (self.factory)()
        });
        Pooled {
            pool: self,
            value: Some(value),
        }
    }

    /// Number of values waiting to be reused.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, mut value: T) {
        value.reset();
        self.idle.lock().push(value);
    }
}

impl<T: Reset + Default + 'static> Default for Pool<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: Reset> std::fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle_count())
            .finish_non_exhaustive()
    }
}

/// A value borrowed from a [`Pool`]; reset and returned when dropped.
pub struct Pooled<'pool, T: Reset> {
    pool: &'pool Pool<T>,
    value: Option<T>,
}

impl<T: Reset + std::fmt::Debug> std::fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pooled").field(&**self).finish()
    }
}

impl<T: Reset> Deref for Pooled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => unreachable!("pooled value is only taken on drop"),
        }
    }
}

impl<T: Reset> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.value {
            Some(value) => value,
            None => unreachable!("pooled value is only taken on drop"),
        }
    }
}

impl<T: Reset> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

//! Lock behind every piece of shared [`Table`](crate::Table) state.
//!
//! Under `std` a panicked holder does not make the table unusable: the
//! poison flag is logged and cleared. Without `std` this is `spin::Mutex`.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    /// Locks, taking over the state left by a holder that panicked.
    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(|poisoned| {
            log::warn!("table lock was poisoned by a panicking holder; recovering");
            self.0.clear_poison();
            poisoned.into_inner()
        })
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

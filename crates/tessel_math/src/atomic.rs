//! Atomic floating point cells.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// An `f64` that can be loaded and stored through a shared reference.
///
/// The value is kept as its bit pattern in an [`AtomicU64`]. Stores use
/// release ordering and loads use acquire ordering, so a store becomes
/// visible to every later load of the same cell. Separate cells are not
/// synchronized with each other.
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Creates a new cell holding the given value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Loads the current value.
    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Stores the given value.
    #[inline]
    pub fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }

    /// Consumes the cell and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

impl Default for AtomicF64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Clone for AtomicF64 {
    fn clone(&self) -> Self {
        Self::new(self.load())
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.load(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn stored_value_is_loaded_back_bit_exact() {
        let cell = AtomicF64::new(1.5);
        assert_eq!(cell.load(), 1.5);

        cell.store(-0.0);
        assert_eq!(cell.load().to_bits(), (-0.0_f64).to_bits());

        cell.store(f64::NAN);
        assert!(cell.load().is_nan());
    }

    #[test]
    fn store_from_other_thread_is_visible_after_join() {
        let cell = Arc::new(AtomicF64::new(0.0));
        let writer = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.store(42.0))
        };
        writer.join().unwrap();
        assert_eq!(cell.load(), 42.0);
    }

    #[test]
    fn into_inner_gives_last_stored_value() {
        let cell = AtomicF64::default();
        cell.store(3.25);
        assert_eq!(cell.into_inner(), 3.25);
    }
}

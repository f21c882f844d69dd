//! Atomic types used for gauge storage.
//!
//! Time series are backed by a signed 64-bit atomic integer.  We always require an atomic integer
//! of that size regardless of whether the standard library exposes one for the target
//! architecture, so on 32-bit targets the portable implementation is used instead.
//!
//! The atomic type that the default [`TimeSeries`][crate::TimeSeries] storage uses is re-exported
//! here for downstream crates that want to build their own cells around it.

use std::sync::atomic::Ordering;

#[cfg(target_pointer_width = "32")]
pub use portable_atomic::AtomicI64;
#[cfg(not(target_pointer_width = "32"))]
pub use std::sync::atomic::AtomicI64;

use crate::LongGaugeFn;

impl LongGaugeFn for AtomicI64 {
    fn add(&self, amount: i64) {
        // `fetch_add` wraps around on overflow.
        let _ = self.fetch_add(amount, Ordering::AcqRel);
    }

    fn set(&self, value: i64) {
        let _ = self.swap(value, Ordering::AcqRel);
    }

    fn value(&self) -> i64 {
        self.load(Ordering::Acquire)
    }
}

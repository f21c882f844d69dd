use std::{fmt, sync::Arc};

use crate::atomics::AtomicI64;

/// A long gauge handler.
///
/// Implementations must make each operation atomic with respect to every other operation on the
/// same value: concurrent calls are applied in a single total order.
pub trait LongGaugeFn {
    /// Adds the given amount to the current value.
    ///
    /// The amount may be negative.  Overflow wraps around, following two's complement semantics.
    fn add(&self, amount: i64);

    /// Sets the current value, discarding the previous one.
    fn set(&self, value: i64);

    /// Reads the current value.
    fn value(&self) -> i64;
}

/// A single time series of a [`LongGauge`][crate::LongGauge].
///
/// `TimeSeries` is a handle to a shared cell: clones refer to the same underlying value, and the
/// value lives for as long as either the owning store or any handle to it does.  It is
/// recommended to resolve a `TimeSeries` once and keep it around, rather than looking it up
/// again for every update.
#[derive(Clone)]
pub struct TimeSeries {
    inner: Arc<dyn LongGaugeFn + Send + Sync>,
}

impl TimeSeries {
    /// Creates a `TimeSeries` backed by a fresh atomic cell initialized to zero.
    pub fn new() -> Self {
        Self::from_arc(Arc::new(AtomicI64::new(0)))
    }

    /// Creates a `TimeSeries` based on a shared handler.
    pub fn from_arc<F: LongGaugeFn + Send + Sync + 'static>(a: Arc<F>) -> Self {
        Self { inner: a }
    }

    /// Adds the given amount to the value.  The amount may be negative.
    ///
    /// Overflow is not checked: adding past `i64::MAX` or `i64::MIN` wraps around.
    pub fn add(&self, amount: i64) {
        self.inner.add(amount)
    }

    /// Sets the value.
    pub fn set(&self, value: i64) {
        self.inner.set(value)
    }

    /// Reads the current value.
    pub fn value(&self) -> i64 {
        self.inner.value()
    }

    /// Returns `true` if both handles refer to the same underlying time series.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        // Compare data pointers only; vtable pointers are not guaranteed to be unique.
        std::ptr::addr_eq(Arc::as_ptr(&this.inner), Arc::as_ptr(&other.inner))
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeSeries").field("value", &self.value()).finish()
    }
}

//! Time source abstraction
//!
//! Step pulse scheduling only needs a monotonically non-decreasing
//! microsecond counter.

/// Monotonic microsecond clock
///
/// Takes `&self` so one clock can be shared by every stepper on the board.
pub trait MonotonicClock {
    /// Microseconds since an arbitrary, fixed reference point
    fn now_us(&self) -> u64;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

impl MonotonicClock for core::cell::Cell<u64> {
    fn now_us(&self) -> u64 {
        self.get()
    }
}

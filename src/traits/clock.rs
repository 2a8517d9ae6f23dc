//! Time source capability.

/// Current-time source for visit timestamps.
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now_millis(&self) -> i64;
}

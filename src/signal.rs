//! Data-ready signaling between an interrupt context and a control loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Single-slot notification flag for the sample-ready interrupt.
///
/// Intended as a single-writer (interrupt context), single-reader (control
/// loop) channel. `const`-constructible so it can live in a `static` owned by
/// program-lifetime context. The flag only guarantees eventual visibility of
/// a notification, not delivery timing; repeated notifications before the
/// consumer runs collapse into one.
///
/// # Examples
///
/// ```rust
/// use adxl345::signal::DataReadySignal;
///
/// static SAMPLE_READY: DataReadySignal = DataReadySignal::new();
///
/// // Interrupt context:
/// SAMPLE_READY.notify();
///
/// // Control loop:
/// if SAMPLE_READY.take() {
///     // read the sensor
/// }
/// ```
pub struct DataReadySignal {
    flag: AtomicBool,
}

impl DataReadySignal {
    /// Creates a new signal with no pending notification.
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Raises the notification; called when a new sample is latched.
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Consumes a pending notification, clearing it.
    ///
    /// Returns `true` at most once per raised notification.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::Acquire)
    }

    /// Returns whether a notification is pending without consuming it.
    pub fn is_pending(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for DataReadySignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_without_pending_notification() {
        let signal = DataReadySignal::new();
        assert!(!signal.is_pending());
        assert!(!signal.take());
    }

    #[test]
    fn take_consumes_exactly_one_notification() {
        let signal = DataReadySignal::new();

        signal.notify();
        assert!(signal.is_pending());
        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn repeated_notifications_collapse() {
        let signal = DataReadySignal::new();

        signal.notify();
        signal.notify();
        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn is_pending_does_not_consume() {
        let signal = DataReadySignal::new();

        signal.notify();
        assert!(signal.is_pending());
        assert!(signal.is_pending());
        assert!(signal.take());
    }
}

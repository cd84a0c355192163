//! Optional debug-event observer.
//!
//! A small number of entry points — DUKPT key derivation and TR-31 header
//! parsing — accept an observer so a caller can log intermediate steps
//! without this crate depending on any particular logging framework. When
//! `None`, nothing is called.

/// Receives debug events from the few operations that emit them.
///
/// Implementations must not panic: a panicking observer is a caller bug,
/// not something this crate guards against. Thread-safety is the caller's
/// responsibility at the point an observer is shared across threads, not a
/// bound on the trait itself — a `Sync` supertrait would rule out simple
/// `RefCell`-backed recorders that are only ever used from one thread.
pub trait DebugObserver {
    fn on_event(&self, module: &str, message: &str);
}

pub(crate) fn notify(observer: Option<&dyn DebugObserver>, module: &str, message: &str) {
    if let Some(observer) = observer {
        observer.on_event(module, message);
    }
}

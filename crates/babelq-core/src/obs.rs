//! Observability sink boundary.
//!
//! Filter logic MUST NOT touch global state directly. Every signal flows
//! through `FilterEvent` and `FilterSink`; tests install a scoped sink to
//! capture events, and the default sink drops them.

use crate::relation::FilterForm;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn FilterSink>> = RefCell::new(None);
}

///
/// FilterEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterEvent {
    /// A filter call touched translated attributes and was intercepted.
    Intercepted {
        form: FilterForm,
        translated: usize,
        remaining: usize,
    },

    /// A filter call touched no translated attribute and was delegated to
    /// the ordinary path unchanged.
    Delegated { form: FilterForm, keys: usize },
}

///
/// FilterSink
///

pub trait FilterSink {
    fn record(&self, event: FilterEvent);
}

///
/// NoopSink
/// Concrete sink when no scoped override is installed.
///

struct NoopSink;

impl FilterSink for NoopSink {
    fn record(&self, _event: FilterEvent) {}
}

/// Record an event against the active sink.
pub(crate) fn record(event: FilterEvent) {
    SINK_OVERRIDE.with(|cell| match *cell.borrow() {
        // SAFETY: the pointer is installed only by `with_sink`, which keeps
        // the sink borrowed for the whole override scope and clears the
        // slot before returning.
        Some(sink) => unsafe { (*sink).record(event) },
        None => NoopSink.record(event),
    });
}

/// Run `f` with `sink` installed as this thread's sink override.
pub fn with_sink<R>(sink: &dyn FilterSink, f: impl FnOnce() -> R) -> R {
    let ptr: *const (dyn FilterSink + '_) = std::ptr::from_ref(sink);
    // SAFETY: erase the borrow's lifetime to store the pointer in the
    // thread-local. `f` runs and the slot is cleared before returning, so the
    // pointer never outlives `sink`.
    let ptr: *const dyn FilterSink = unsafe { std::mem::transmute(ptr) };
    SINK_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = Some(ptr);
    });

    let result = f();

    SINK_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = None;
    });

    result
}

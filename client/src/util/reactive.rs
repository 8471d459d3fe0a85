//! Bridge from observable state cells to Leptos signals.
//!
//! A mirror is a read-only signal that follows one `StateCell`. The
//! subscription lives as long as the reactive owner that created it and is
//! released in `on_cleanup`.

use leptos::prelude::*;

use crate::state::cell::StateCell;

/// Follow `cell` from the current reactive owner.
pub fn mirror<T>(cell: &StateCell<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let signal = RwSignal::new(cell.get());
    let subscription = cell.subscribe(move |value: &T| {
        let _ = signal.try_set(value.clone());
    });
    on_cleanup(move || subscription.unsubscribe());
    signal.read_only()
}

#[cfg(test)]
#[path = "reactive_test.rs"]
mod reactive_test;

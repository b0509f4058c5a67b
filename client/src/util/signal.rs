//! Signal writes from async tasks that may outlive their view.
//!
//! A fetch started by a page can resolve after the user navigated away and
//! the page's signals were disposed. Those late writes are dropped and noted
//! on the console instead of panicking.

#[cfg(test)]
#[path = "signal_test.rs"]
mod signal_test;

use leptos::prelude::*;

/// Update `signal` if it is still alive. Returns whether the update ran.
pub fn update_live<T, F>(signal: RwSignal<T>, update: F) -> bool
where
    T: Send + Sync + 'static,
    F: FnOnce(&mut T),
{
    let applied = signal.try_update(update).is_some();
    if !applied {
        leptos::logging::log!("view disposed; dropped late update");
    }
    applied
}

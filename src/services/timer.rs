use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Runs `f` once after `ms` milliseconds on the browser event loop.
/// When no timeout can be scheduled `f` runs immediately, so it is never lost.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            log::warn!("no window available, skipping {}ms delay", ms);
            f();
            return;
        }
    };

    let pending = Rc::new(RefCell::new(Some(f)));
    let callback = {
        let pending = pending.clone();
        Closure::once_into_js(move || run_pending(&pending))
    };
    let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
    {
        log::warn!("error scheduling {}ms timeout, running now: {:?}", ms, e);
        run_pending(&pending);
    }
}

/// Takes the job out of its slot and runs it; a second call does nothing.
fn run_pending<F: FnOnce()>(pending: &RefCell<Option<F>>) {
    let job = pending.borrow_mut().take();
    if let Some(job) = job {
        job();
    }
}

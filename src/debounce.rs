use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Wraps `f` so that a burst of calls runs it once, `wait_ms` after the
/// last call. A zero wait hands `f` back unchanged.
pub fn debounce<F>(wait_ms: u32, f: F) -> Box<dyn FnMut()>
where
    F: FnMut() + 'static,
{
    if wait_ms == 0 {
        return Box::new(f);
    }
    let f = Rc::new(RefCell::new(f));
    let mut pending: Option<Timeout> = None;
    Box::new(move || {
        if let Some(timeout) = pending.take() {
            timeout.cancel();
        }
        let f = f.clone();
        pending = Some(Timeout::new(wait_ms, move || (*f.borrow_mut())()));
    })
}

//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! The loop owns its callback through an `Rc<RefCell<Option<Closure>>>`
//! holder and re-arms itself after every tick until the shared `alive` flag
//! is cleared. The handle is `Send + Sync`, so it can be moved into
//! `on_cleanup`.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct FrameLoop {
    alive: Arc<AtomicBool>,
}

impl FrameLoop {
    /// Start calling `tick` once per animation frame.
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    pub fn start(tick: impl FnMut() + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        #[cfg(feature = "csr")]
        run(tick, Arc::clone(&alive));
        Self { alive }
    }

    /// Stop after the current frame; the callback is released.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

#[cfg(feature = "csr")]
fn run(mut tick: impl FnMut() + 'static, alive: Arc<AtomicBool>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        tick();
        let rearmed = match (web_sys::window(), holder_for_cb.borrow().as_ref()) {
            (Some(window), Some(cb)) => window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
            _ => false,
        };
        if !rearmed {
            leptos::logging::warn!("animation frame loop stopped: request failed");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        leptos::logging::warn!("animation frame loop could not start");
    }
}

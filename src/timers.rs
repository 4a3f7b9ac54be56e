use crate::{dom, overlay, SharedComposer};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the composer's timeline from the browser clock.
///
/// At most one `setTimeout` is outstanding at any time: it is armed for the
/// timeline's next deadline and re-armed after each firing.
pub struct TimerHost {
    composer: SharedComposer,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TimerHost {
    pub fn start(composer: SharedComposer) -> Rc<Self> {
        let host = Rc::new(Self {
            composer,
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<Self> = Rc::downgrade(&host);
        *host.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(h) = weak.upgrade() {
                h.fire();
            }
        }) as Box<dyn FnMut()>));
        host.arm();
        host
    }

    fn fire(&self) {
        self.handle.set(None);
        let changed = self.composer.borrow_mut().advance(dom::now_ms());
        if changed {
            if let Some(doc) = dom::window_document() {
                overlay::apply(&doc, &self.composer.borrow());
            }
        }
        self.arm();
    }

    fn arm(&self) {
        let deadline = {
            let c = self.composer.borrow();
            if c.is_torn_down() {
                return;
            }
            c.next_deadline()
        };
        let Some(deadline) = deadline else {
            log::debug!("[timers] timeline drained");
            return;
        };
        let delay = deadline.saturating_sub(dom::now_ms()).min(i32::MAX as u64) as i32;
        let (Some(w), Some(cb)) = (web::window(), self.callback.borrow().as_ref().map(|c| {
            c.as_ref().unchecked_ref::<js_sys::Function>().clone()
        })) else {
            return;
        };
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(&cb, delay) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    }

    /// Cancel the outstanding browser timer and every timeline entry.
    pub fn teardown(&self) {
        if let Some(h) = self.handle.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(h);
            }
        }
        self.composer.borrow_mut().teardown();
        self.callback.borrow_mut().take();
        log::info!("[timers] torn down");
    }
}

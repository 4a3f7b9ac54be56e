use crate::core::OrbitControls;
use crate::input::{self, PointerState};
use crate::{dom, overlay, SharedComposer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub composer: SharedComposer,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let first = !w.composer.borrow().state().has_interacted;
        w.composer.borrow_mut().on_pointer_down();
        if first {
            if let Some(doc) = dom::window_document() {
                overlay::apply(&doc, &w.composer.borrow());
            }
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mode = input::drag_mode(ev.button(), ev.shift_key());
        w.pointer.borrow_mut().press(pos, mode);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let Some((mode, delta)) = w.pointer.borrow_mut().move_to(pos) else {
            return;
        };
        let h = w.canvas.height() as f32;
        let mut orbit = w.orbit.borrow_mut();
        match mode {
            input::DragMode::Rotate => orbit.rotate(delta.x, delta.y, h),
            input::DragMode::Pan => orbit.pan(delta.x, delta.y, h),
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    for name in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            w.pointer.borrow_mut().release();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let notches = input::wheel_notches(ev.delta_y(), ev.delta_mode());
        w.orbit.borrow_mut().zoom(notches);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_contextmenu(w: &InputWiring) {
    // right-drag pans; keep the browser menu out of the way
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

use crate::input::{key_action, KeyAction};
use crate::SharedComposer;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, composer: &SharedComposer) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    if let Some(KeyAction::ToggleMotion) = key_action(&ev.key()) {
        ev.prevent_default();
        super::toggle_motion(composer);
    }
}

pub fn wire_global_keydown(composer: SharedComposer) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &composer);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

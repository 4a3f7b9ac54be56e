mod keyboard;
mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::{dom, overlay, SharedComposer};

/// Flip the reduced-motion preference and refresh the page.
///
/// The render loop reads the new policy on its next frame; nothing already
/// in flight is migrated.
pub fn toggle_motion(composer: &SharedComposer) {
    composer.borrow_mut().toggle_reduce_motion();
    if let Some(doc) = dom::window_document() {
        overlay::apply(&doc, &composer.borrow());
    }
}

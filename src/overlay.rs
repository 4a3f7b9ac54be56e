use crate::core::{
    progress_label, progress_ring_dash, tagline_segments, LOADING_CAPTION, ROTATE_HINT_TEXT,
    SUBTITLE_TEXT, TAGLINES, TITLE_TEXT,
};
use crate::{dom, Composer, SharedComposer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill in the fixed copy and theme colors. Runs once at startup.
pub fn render_static(document: &web::Document, composer: &SharedComposer) {
    let c = composer.borrow();
    let theme = c.theme();
    dom::set_text(document, "title", TITLE_TEXT);
    dom::set_text(document, "subtitle", SUBTITLE_TEXT);
    dom::set_text(document, "loading-caption", LOADING_CAPTION);
    dom::set_text(document, "rotate-hint-text", ROTATE_HINT_TEXT);
    dom::set_style(document, "rotate-hint-text", "color", theme.hint_color);
    if let Some(body) = document.body() {
        _ = body.style().set_property("background", theme.background);
    }
    for (i, (offset, color)) in theme.loading_ring_stops().into_iter().enumerate() {
        if let Some(stop) = document.get_element_by_id(&format!("loading-ring-stop-{i}")) {
            _ = stop.set_attribute("offset", offset);
            _ = stop.set_attribute("stop-color", color);
        }
    }
    let is_touch = c.state().is_touch;
    drop(c);
    build_taglines(document, composer, is_touch);
}

fn build_taglines(document: &web::Document, composer: &SharedComposer, is_touch: bool) {
    let Some(root) = document.get_element_by_id("tagline") else {
        return;
    };
    root.set_inner_html("");
    for line in TAGLINES {
        let Ok(line_el) = document.create_element("div") else {
            continue;
        };
        _ = line_el.set_attribute("class", "tagline-line");
        for word in tagline_segments(line, is_touch) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(word));
            if !is_touch {
                _ = span.set_attribute("class", "tagline-word");
                wire_word_hover(&span, composer);
            }
            _ = line_el.append_child(&span);
        }
        _ = root.append_child(&line_el);
    }
}

fn wire_word_hover(span: &web::Element, composer: &SharedComposer) {
    let enter_target = span.clone();
    let enter_composer = composer.clone();
    let enter = Closure::wrap(Box::new(move || {
        let c = enter_composer.borrow();
        let style = c
            .theme()
            .tagline_hover
            .hover_style(c.state().reduce_motion);
        if !style.is_empty() {
            _ = enter_target.set_attribute("style", &style);
        }
    }) as Box<dyn FnMut()>);
    _ = span.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let leave_target = span.clone();
    let leave = Closure::wrap(Box::new(move || {
        _ = leave_target.remove_attribute("style");
    }) as Box<dyn FnMut()>);
    _ = span.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

/// Push the composer's current flags into the DOM.
pub fn apply(document: &web::Document, composer: &Composer) {
    let s = composer.state();

    dom::set_class(document, "loading-screen", "hidden", !s.loading);
    dom::set_text(document, "loading-percent", &progress_label(s.progress));
    if let Some(ring) = document.get_element_by_id("loading-progress-ring") {
        let (circumference, offset) = progress_ring_dash(s.progress);
        _ = ring.set_attribute("stroke-dasharray", &format!("{circumference:.2}"));
        _ = ring.set_attribute("stroke-dashoffset", &format!("{offset:.2}"));
    }

    dom::set_class(document, "tagline", "visible", s.text_visible);
    dom::set_class(document, "tagline", "glow", composer.glow_active());
    dom::set_class(document, "subtitle", "visible", s.subtitle_visible);

    dom::set_class(document, "rotate-hint", "hidden", !composer.rotate_hint_visible());
    dom::set_style(
        document,
        "rotate-hint",
        "opacity",
        &format!("{}", composer.hint_opacity()),
    );

    dom::set_style(
        document,
        "title",
        "background-image",
        &composer.theme().title_background(s.reduce_motion),
    );
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if s.reduce_motion {
            cl.add_1("reduce-motion")
        } else {
            cl.remove_1("reduce-motion")
        };
    }
    if let Some(btn) = document.get_element_by_id("motion-toggle") {
        btn.set_text_content(Some(if s.reduce_motion {
            "Enable motion"
        } else {
            "Reduce motion"
        }));
        _ = btn.set_attribute("aria-pressed", if s.reduce_motion { "true" } else { "false" });
    }
}

#![cfg(target_arch = "wasm32")]
use crate::core::{
    pagehide_tears_down, ModelPresenter, OrbitControls, SceneComposer, SiteConfig, WaveEffect,
    MODEL_TARGET_SIZE,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;
mod storage;
mod timers;

use storage::LocalStoragePreference;

pub(crate) type Composer = SceneComposer<LocalStoragePreference>;
pub(crate) type SharedComposer = Rc<RefCell<Composer>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Stop the render loop and cancel every UI timer when the page is unloaded.
/// A page entering the back/forward cache keeps both and resumes on return.
fn wire_teardown(running: Rc<Cell<bool>>, timers: Rc<timers::TimerHost>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !pagehide_tears_down(ev.persisted()) {
            log::debug!("[lifecycle] page cached; keeping timeline");
            return;
        }
        running.set(false);
        timers.teardown();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Fetch the model in the background. Failure leaves the presenter empty and
/// nothing else waits on it.
fn spawn_model_load(presenter: Rc<RefCell<ModelPresenter>>, path: String) {
    spawn_local(async move {
        match loader::load_obj(&path).await {
            Ok(meshes) => {
                presenter.borrow_mut().on_loaded(meshes);
            }
            Err(e) => presenter.borrow_mut().on_failed(&format!("{e:#}")),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("monk-mode-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SiteConfig::from_query(&dom::location_query());
    let canvas_id = config.canvas_id.clone();
    let model_path = config.model_path.clone();

    // UI state and its timeline come up first and never wait on the GPU or the asset
    let composer: SharedComposer = Rc::new(RefCell::new(SceneComposer::new(
        config,
        LocalStoragePreference::open(),
    )));
    composer
        .borrow_mut()
        .start(dom::now_ms(), dom::is_touch_device());
    overlay::render_static(&document, &composer);
    overlay::apply(&document, &composer.borrow());
    let timers = timers::TimerHost::start(composer.clone());

    let toggle_composer = composer.clone();
    dom::add_click_listener(&document, "motion-toggle", move || {
        events::toggle_motion(&toggle_composer);
    });
    events::wire_global_keydown(composer.clone());

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let orbit = Rc::new(RefCell::new(OrbitControls::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        composer: composer.clone(),
        orbit: orbit.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let presenter = Rc::new(RefCell::new(ModelPresenter::new(MODEL_TARGET_SIZE)));
    spawn_model_load(presenter.clone(), model_path);

    let effect = WaveEffect::new(composer.borrow().theme().wave_style);
    let gpu = frame::init_gpu(&canvas, &effect).await;

    let running = Rc::new(Cell::new(true));
    wire_teardown(running.clone(), timers);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        composer,
        effect,
        presenter,
        orbit,
        canvas,
        gpu,
        started_at: Instant::now(),
    }));
    frame::start_loop(frame_ctx, running);

    Ok(())
}

#![cfg(target_arch = "wasm32")]
use parallax_core::{ParallaxEngine, RenderConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod overlay;
mod palette;
mod prefs;
mod presenter;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root: web::HtmlElement = document
        .get_element_by_id(constants::ROOT_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::ROOT_ELEMENT_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let storage = prefs::local_storage();
    let saved = prefs::load(storage.as_ref());
    log::info!(
        "[prefs] layers={} easing={:.3} blur={:.2} size={:.2}",
        saved.num_layers,
        saved.easing_factor,
        saved.blur_scale,
        saved.circle_size_scale
    );

    // The rAF closure needs the app and the app's host needs the closure:
    // create the slot first and fill it once the app exists.
    let frame_callback: host::FrameCallback = Rc::new(RefCell::new(None));
    let engine = ParallaxEngine::new(
        host::RafHost::new(window.clone(), frame_callback.clone()),
        rand::random(),
    );
    let presenter = presenter::DomPresenter::new(document.clone(), root, rand::random());
    let app = Rc::new(RefCell::new(frame::App::new(
        engine,
        presenter,
        document.clone(),
        storage,
    )));
    frame::install_frame_callback(&frame_callback, &app);

    app.borrow_mut()
        .relayout(saved.num_layers, saved.render_config(RenderConfig::default()))?;

    let pointer = events::pointer::wire_pointer_target(
        &document,
        &window,
        app.borrow().engine.pointer_target(),
    )?;
    let keyboard = events::keyboard::wire_keyboard(&window, Rc::downgrade(&app))?;
    app.borrow_mut().attach_listeners(vec![pointer, keyboard]);
    events::wire_teardown(&window, Rc::downgrade(&app));

    // Handlers and the frame closure only hold weak references; the page
    // keeps the app alive for its whole lifetime.
    std::mem::forget(app);
    Ok(())
}

pub mod keyboard;
pub mod pointer;

use crate::frame::App;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Tear the engine down when the page goes away. Lives for the page itself.
pub fn wire_teardown(window: &web::Window, app: Weak<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(app) = app.upgrade() {
            app.borrow_mut().teardown();
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

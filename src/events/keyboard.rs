use crate::dom::EventListener;
use crate::frame::App;
use crate::input::control_for_key;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

pub fn wire_keyboard(window: &web::Window, app: Weak<RefCell<App>>) -> anyhow::Result<EventListener> {
    EventListener::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        let Some(control) = control_for_key(&ev.key()) else {
            return;
        };
        let Some(app) = app.upgrade() else {
            return;
        };
        log::info!("[keys] {:?}", control);
        if let Err(e) = app.borrow_mut().apply_control(control) {
            log::error!("[keys] {:?} failed: {:?}", control, e);
        }
        ev.prevent_default();
    })
}

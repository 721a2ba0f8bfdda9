use parallax_core::FrameHost;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the rAF callback; filled once the app exists.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame as the engine's frame host.
pub struct RafHost {
    window: web::Window,
    callback: FrameCallback,
}

impl RafHost {
    pub fn new(window: web::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }

    /// Drop the callback closure; nothing can be requested afterwards.
    pub fn release(&mut self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameHost for RafHost {
    type Request = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, request: i32) {
        _ = self.window.cancel_animation_frame(request);
    }
}

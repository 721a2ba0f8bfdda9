use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS pixel size of the window's layout viewport.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

pub fn create_div(document: &web::Document, class: &str, css: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?;
    el.set_class_name(class);
    _ = el.set_attribute("style", css);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("div is not an HtmlElement: {:?}", e))
}

/// An attached event listener; dropping it detaches the handler.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl EventListener {
    pub fn listen<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> anyhow::Result<Self>
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target
            .add_event_listener_with_callback(event, &callback)
            .map_err(|e| anyhow::anyhow!("listen {}: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

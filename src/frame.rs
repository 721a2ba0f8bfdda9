use crate::dom::EventListener;
use crate::host::{FrameCallback, RafHost};
use crate::input::{apply_control, Control, ControlEffect};
use crate::overlay;
use crate::prefs;
use crate::presenter::DomPresenter;
use crate::style;
use parallax_core::{ConfigPatch, FrameOutcome, ParallaxEngine, Preferences, RenderConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Everything the frame callback and the input handlers share.
pub struct App {
    pub engine: ParallaxEngine<RafHost>,
    pub presenter: DomPresenter,
    pub document: web::Document,
    pub storage: Option<web::Storage>,
    listeners: Vec<EventListener>,
}

impl App {
    pub fn new(
        engine: ParallaxEngine<RafHost>,
        presenter: DomPresenter,
        document: web::Document,
        storage: Option<web::Storage>,
    ) -> Self {
        Self {
            engine,
            presenter,
            document,
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = instant::now();
        if let FrameOutcome::Stopped = self.engine.on_frame(now, &mut self.presenter) {
            log::debug!("[frame] callback after stop ignored");
        }
    }

    /// Reseed the stack with `num_layers` layers and rebuild the DOM for it.
    pub fn relayout(&mut self, num_layers: usize, config: RenderConfig) -> anyhow::Result<()> {
        self.engine.initialize(num_layers, config)?;
        self.presenter
            .rebuild(self.engine.layers(), self.engine.config())?;
        self.after_change();
        Ok(())
    }

    pub fn reconfigure(&mut self, patch: ConfigPatch) -> anyhow::Result<()> {
        let previous_size = self.engine.config().circle_size_scale;
        self.engine.update_config(patch)?;
        let size = self.engine.config().circle_size_scale;
        if size != previous_size {
            self.presenter.resize_circles(size);
        }
        self.after_change();
        Ok(())
    }

    pub fn apply_control(&mut self, control: Control) -> anyhow::Result<()> {
        match apply_control(control, self.engine.layers().len(), self.engine.config()) {
            ControlEffect::Relayout(n) => {
                let config = *self.engine.config();
                self.relayout(n, config)
            }
            ControlEffect::Reconfigure(patch) => self.reconfigure(patch),
            ControlEffect::ToggleHint => {
                overlay::toggle_hint(&self.document);
                Ok(())
            }
        }
    }

    pub fn attach_listeners(&mut self, listeners: Vec<EventListener>) {
        self.listeners.extend(listeners);
    }

    /// Stop the loop, detach input and drop the frame closure.
    pub fn teardown(&mut self) {
        self.engine.teardown();
        self.listeners.clear();
        self.engine.host_mut().release();
        self.presenter.clear();
    }

    fn after_change(&self) {
        let config = self.engine.config();
        let num_layers = self.engine.layers().len();
        prefs::save(
            self.storage.as_ref(),
            &Preferences::capture(num_layers, config),
        );
        overlay::update_hint(&self.document, &style::hint_text(num_layers, config));
    }
}

/// Fill the rAF slot with a callback driving `app`. The closure only holds a
/// weak reference so dropping the app breaks the cycle.
pub fn install_frame_callback(callback: &FrameCallback, app: &Rc<RefCell<App>>) {
    let weak = Rc::downgrade(app);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(app) = weak.upgrade() {
            app.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));
}

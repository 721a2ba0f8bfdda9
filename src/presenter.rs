use crate::constants::{CIRCLE_CLASS, LAYER_CLASS, ROOT_BACKGROUND};
use crate::dom;
use crate::palette::random_warm_color;
use crate::style;
use parallax_core::{LayerDescriptor, LayerSink, PresentError, ProjectedLayer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

struct LayerElements {
    layer: web::HtmlElement,
    circle: web::HtmlElement,
}

/// Owns the DOM for the layer stack and applies projected layers to it.
pub struct DomPresenter {
    document: web::Document,
    root: web::HtmlElement,
    layers: Vec<LayerElements>,
    rng: StdRng,
}

impl DomPresenter {
    pub fn new(document: web::Document, root: web::HtmlElement, seed: u64) -> Self {
        let s = root.style();
        _ = s.set_property("perspective", &style::root_perspective());
        _ = s.set_property("position", "relative");
        _ = s.set_property("overflow", "hidden");
        _ = s.set_property("background", ROOT_BACKGROUND);
        Self {
            document,
            root,
            layers: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace all layer elements, one per descriptor, with fresh colors.
    pub fn rebuild(&mut self, layers: &[LayerDescriptor], config: &RenderConfig) -> anyhow::Result<()> {
        self.root.set_inner_html("");
        self.layers.clear();
        for desc in layers {
            let layer = dom::create_div(&self.document, LAYER_CLASS, style::layer_css())?;
            let border = random_warm_color(&mut self.rng);
            let glow = random_warm_color(&mut self.rng);
            let circle = dom::create_div(
                &self.document,
                CIRCLE_CLASS,
                &style::circle_css(border, glow, config.circle_size_scale, desc.initial_offset),
            )?;
            layer
                .append_child(&circle)
                .map_err(|e| anyhow::anyhow!("append circle: {:?}", e))?;
            self.root
                .append_child(&layer)
                .map_err(|e| anyhow::anyhow!("append layer: {:?}", e))?;
            self.layers.push(LayerElements { layer, circle });
        }
        log::info!("[present] built {} layers", self.layers.len());
        Ok(())
    }

    /// Resize circles in place, keeping their colors and offsets.
    pub fn resize_circles(&self, circle_size_scale: f32) {
        let size = format!("{:.2}px", style::circle_size_px(circle_size_scale));
        for el in &self.layers {
            let s = el.circle.style();
            _ = s.set_property("width", &size);
            _ = s.set_property("height", &size);
        }
    }

    pub fn clear(&mut self) {
        self.root.set_inner_html("");
        self.layers.clear();
    }
}

impl LayerSink for DomPresenter {
    fn write_layer(&mut self, layer: &ProjectedLayer) -> Result<(), PresentError> {
        let index = layer.index;
        let el = self
            .layers
            .get(index)
            .filter(|el| el.layer.is_connected())
            .ok_or(PresentError::MissingLayer(index))?;
        let s = el.layer.style();
        let set = |name: &str, value: &str| {
            s.set_property(name, value).map_err(|e| PresentError::Style {
                index,
                reason: format!("{}: {:?}", name, e),
            })
        };
        set("transform", &style::layer_transform(layer))?;
        set("filter", &style::blur_filter(layer.blur_px))?;
        set("z-index", &style::z_index(layer))?;
        Ok(())
    }
}

// Front-end DOM and styling constants.

// Elements expected in the host page
pub const ROOT_ELEMENT_ID: &str = "parallax-root";
pub const HINT_ELEMENT_ID: &str = "hint-overlay";

// Class names written onto generated elements
pub const LAYER_CLASS: &str = "parallax-layer";
pub const CIRCLE_CLASS: &str = "circle";
pub const HIDDEN_CLASS: &str = "hidden";

// Root container backdrop
pub const ROOT_BACKGROUND: &str = "linear-gradient(to right, rgba(239, 68, 68, 0.1), transparent)";

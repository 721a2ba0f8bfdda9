pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod motion;
pub mod prefs;
pub mod projector;
pub mod registry;
pub mod scheduler;
pub mod tracker;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use motion::*;
pub use prefs::*;
pub use projector::*;
pub use registry::*;
pub use scheduler::*;
pub use tracker::*;

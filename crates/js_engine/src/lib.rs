//! JavaScript engine integration using Boa.
//!
//! This crate hosts the page console on a Boa context: it evaluates console
//! commands, inspects the resulting values for rendering, and installs the
//! `console` object whose output lands in the console panel.

pub mod console;
pub mod engine;
pub mod inspect;

pub use engine::{JsEngine, JsEngineError};
pub use inspect::{BoaInspector, InspectHelpers};

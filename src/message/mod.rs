//! Message rendering subsystem.
//!
//! Turns validator failures into final message payloads through a pluggable
//! renderer, selected by a three-tier policy: call-site override, engine
//! configuration, built-in default.

mod renderer;
mod resolve;
mod template;

pub use renderer::{ParameterizedRenderer, Rendered, Renderer, RendererRef, TemplateRenderer};
pub use resolve::{resolve_message, MessageOptions, MessageResolver};
pub use template::{render, Bindings};

//! Message renderers.
//!
//! A renderer turns a template plus context bindings into the final message
//! payload. Renderers differ only in output shape: the default renderer
//! produces an interpolated string, the parameterized renderer defers
//! interpolation and carries the raw template with its bindings (e.g. for
//! localization). The pipeline never inspects which shape it got.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::template::{self, Bindings};

/// Final message payload produced by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// Fully interpolated message text
    Text(String),
    /// Raw template plus bindings, interpolation deferred to a later stage
    Parameterized {
        template: String,
        bindings: Bindings,
    },
}

impl Rendered {
    /// Borrows the interpolated text, if this is the text shape.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Parameterized { .. } => None,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(s) => write!(f, "{}", s),
            Rendered::Parameterized { template, .. } => write!(f, "{}", template),
        }
    }
}

/// Turns a message template and context bindings into a final payload.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, bindings: &Bindings) -> Rendered;
}

/// Shared renderer handle, usable as a call-site or process-wide override.
pub type RendererRef = Arc<dyn Renderer>;

/// Built-in default renderer: interpolates the template over the bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl Renderer for TemplateRenderer {
    fn render(&self, template: &str, bindings: &Bindings) -> Rendered {
        Rendered::Text(template::render(template, bindings))
    }
}

/// Deferring renderer: returns the template and bindings unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterizedRenderer;

impl Renderer for ParameterizedRenderer {
    fn render(&self, template: &str, bindings: &Bindings) -> Rendered {
        Rendered::Parameterized {
            template: template.to_string(),
            bindings: bindings.clone(),
        }
    }
}

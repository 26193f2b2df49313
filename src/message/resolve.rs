//! Three-tier error message resolution.
//!
//! Renderer selection, first match wins:
//! 1. call-site `renderer` override in the options
//! 2. renderer carried by the engine configuration
//! 3. built-in default renderer (template interpolation)
//!
//! A `message` override in the options is rendered through the context
//! bindings; otherwise the pre-formatted default message passes through.

use std::fmt;

use crate::config::EngineConfig;

use super::renderer::{Rendered, Renderer, RendererRef, TemplateRenderer};
use super::template::Bindings;

/// Message-shaping options a validator forwards from its caller.
#[derive(Clone, Default)]
pub struct MessageOptions {
    /// Template override replacing the validator's default message
    pub message: Option<String>,
    /// Call-site renderer override, wins over any configured renderer
    pub renderer: Option<RendererRef>,
}

impl MessageOptions {
    /// Options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a message template override.
    pub fn with_message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Sets a call-site renderer override.
    pub fn with_renderer(mut self, renderer: RendererRef) -> Self {
        self.renderer = Some(renderer);
        self
    }
}

impl fmt::Debug for MessageOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageOptions")
            .field("message", &self.message)
            .field("renderer", &self.renderer.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

/// Resolves failure messages for one engine's validators.
///
/// Built from an `EngineConfig` so the process-wide tier is explicit state,
/// not a hidden global.
#[derive(Clone, Default)]
pub struct MessageResolver {
    configured: Option<RendererRef>,
}

impl MessageResolver {
    /// Creates a resolver carrying the configuration's renderer tier.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            configured: config.renderer().cloned(),
        }
    }

    /// Produces the final message payload for a failed check.
    pub fn resolve(
        &self,
        options: &MessageOptions,
        default_message: &str,
        bindings: &Bindings,
    ) -> Rendered {
        let template = options.message.as_deref().unwrap_or(default_message);
        match options.renderer.as_ref().or(self.configured.as_ref()) {
            Some(renderer) => renderer.render(template, bindings),
            None => TemplateRenderer.render(template, bindings),
        }
    }
}

impl fmt::Debug for MessageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageResolver")
            .field("configured", &self.configured.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

/// Resolves a message with default configuration (call-site overrides only).
pub fn resolve_message(
    options: &MessageOptions,
    default_message: &str,
    bindings: &Bindings,
) -> Rendered {
    MessageResolver::default().resolve(options, default_message, bindings)
}

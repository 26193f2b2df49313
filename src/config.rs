//! Engine configuration.
//!
//! Explicit, read-only configuration handed to the message resolver at
//! construction time. There is no hidden global lookup: callers build one
//! `EngineConfig` and pass it wherever a process-wide renderer choice should
//! apply.

use std::fmt;

use crate::message::RendererRef;

/// Read-only configuration shared by one engine and its resolvers.
#[derive(Clone, Default)]
pub struct EngineConfig {
    /// Process-wide renderer choice; call-site options still win over it.
    renderer: Option<RendererRef>,
}

impl EngineConfig {
    /// Configuration with every setting at its built-in default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration carrying a process-wide renderer.
    pub fn with_renderer(renderer: RendererRef) -> Self {
        Self {
            renderer: Some(renderer),
        }
    }

    /// The configured renderer, if any.
    pub fn renderer(&self) -> Option<&RendererRef> {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("renderer", &self.renderer.as_ref().map(|_| "<renderer>"))
            .finish()
    }
}

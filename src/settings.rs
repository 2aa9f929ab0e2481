//! Render Pass Settings
//!
//! [`RenderPassSettings`] is the plain-data form of a [`RenderPass`]'s
//! configuration. It can be built in code or deserialized from JSON, and is
//! consumed by [`RenderPass::with_settings`].
//!
//! # Fields
//!
//! | Field              | Description                                   | Default |
//! |--------------------|-----------------------------------------------|---------|
//! | `clear`            | Force-clear the target in the render call     | `true`  |
//! | `clear_depth`      | Clear depth before rendering                  | `false` |
//! | `needs_swap`       | Ask the composer to swap ping-pong buffers    | `false` |
//! | `render_to_screen` | Render to the screen instead of the read buffer | `false` |
//! | `enabled`          | Whether the composer runs the pass            | `true`  |
//! | `clear_color`      | Clear color applied for the call (`0xRRGGBB`) | `None`  |
//! | `clear_alpha`      | Clear alpha applied with `clear_color`        | `0.0`   |
//!
//! # Example
//!
//! ```rust,ignore
//! let settings = RenderPassSettings::from_json(r#"{ "clear_depth": true, "clear_color": 16777215 }"#)?;
//! let pass = RenderPass::with_settings(scene, camera, &settings);
//! ```
//!
//! [`RenderPass`]: crate::passes::RenderPass
//! [`RenderPass::with_settings`]: crate::passes::RenderPass::with_settings

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::errors::{ConfigError, Result};
use crate::passes::PassFlags;

/// Configuration of a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPassSettings {
    pub clear: bool,
    pub clear_depth: bool,
    pub needs_swap: bool,
    pub render_to_screen: bool,
    pub enabled: bool,

    /// When `None`, the renderer's clear color is left untouched.
    pub clear_color: Option<Color>,
    pub clear_alpha: f32,
}

impl Default for RenderPassSettings {
    fn default() -> Self {
        Self {
            clear: true,
            clear_depth: false,
            needs_swap: false,
            render_to_screen: false,
            enabled: true,
            clear_color: None,
            clear_alpha: 0.0,
        }
    }
}

impl RenderPassSettings {
    /// Parses and validates settings from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.clear_alpha) {
            return Err(ConfigError::ClearAlphaOutOfRange(self.clear_alpha));
        }
        Ok(())
    }

    /// The composer-facing subset of the settings.
    #[must_use]
    pub fn pass_flags(&self) -> PassFlags {
        PassFlags {
            enabled: self.enabled,
            clear: self.clear,
            needs_swap: self.needs_swap,
            render_to_screen: self.render_to_screen,
        }
    }
}

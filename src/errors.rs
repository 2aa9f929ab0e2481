//! Error Types
//!
//! This module defines the error types returned by the composer and the
//! settings layer.
//!
//! # Overview
//!
//! Passes never wrap renderer failures: [`Pass::render`](crate::passes::Pass::render)
//! returns the renderer's own error type unmodified. Wrapping happens one level
//! up, in [`EffectComposer::render`](crate::composer::EffectComposer::render),
//! which tags the failure with the name of the pass that produced it.
//!
//! - [`ComposerError`] covers failures while running a pass chain.
//! - [`ConfigError`] covers invalid or unparsable pass settings.

use thiserror::Error;

/// Failure while running a pass chain.
///
/// Generic over the renderer's error type so the renderer error stays
/// reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum ComposerError<E>
where
    E: std::error::Error + 'static,
{
    /// A pass returned an error from the renderer. The remaining passes of
    /// the chain were not run.
    #[error("Pass `{pass}` failed")]
    Pass {
        /// Name of the failing pass
        pass: String,
        /// Error reported by the renderer
        #[source]
        source: E,
    },
}

impl<E> ComposerError<E>
where
    E: std::error::Error + 'static,
{
    /// Name of the pass that failed.
    #[must_use]
    pub fn pass_name(&self) -> &str {
        match self {
            Self::Pass { pass, .. } => pass,
        }
    }

    /// Unwraps the renderer error.
    pub fn into_source(self) -> E {
        match self {
            Self::Pass { source, .. } => source,
        }
    }
}

/// Invalid pass configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Clear alpha must be a finite value in `[0, 1]`.
    #[error("Clear alpha out of range: {0} (expected 0.0..=1.0)")]
    ClearAlphaOutOfRange(f32),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ConfigError>`.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("device lost")]
    struct DeviceLost;

    #[test]
    fn composer_error_keeps_pass_name_and_source() {
        let err = ComposerError::Pass {
            pass: "RenderPass".to_string(),
            source: DeviceLost,
        };

        assert_eq!(err.to_string(), "Pass `RenderPass` failed");
        assert_eq!(err.pass_name(), "RenderPass");

        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("device lost"));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::ClearAlphaOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}

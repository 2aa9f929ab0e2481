//! # Effect Composer
//!
//! Post-processing pass chain for 3D scene renderers.
//!
//! The crate does no drawing of its own. The host engine implements
//! [`Renderer`] and [`SceneOverride`]; passes toggle renderer state around the
//! host's draw and clear calls, and [`EffectComposer`] sequences them over a
//! ping-pong pair of render targets.
//!
//! # Modules
//!
//! - [`passes`]: the [`Pass`] contract and the built-in [`RenderPass`] / [`ClearPass`]
//! - [`state`]: scopes that restore renderer/scene state on drop
//! - [`composer`]: the pass chain
//! - [`settings`]: serde-backed pass configuration
//! - [`renderer`]: traits the host engine implements
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use effect_composer::{Color, EffectComposer, RenderPass};
//!
//! let scene = Arc::new(RwLock::new(scene));
//! let camera = Arc::new(RwLock::new(camera));
//!
//! let mut composer = EffectComposer::new(target_a, target_b).with_pass(
//!     RenderPass::new(scene.clone(), camera.clone())
//!         .with_override_material(depth_material)
//!         .with_clear_color(Color::BLACK, 1.0),
//! );
//!
//! composer.render(&mut renderer, delta_time)?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod composer;
pub mod errors;
pub mod passes;
pub mod renderer;
pub mod settings;
pub mod state;

pub use color::Color;
pub use composer::EffectComposer;
pub use errors::{ComposerError, ConfigError};
pub use passes::{ClearPass, Pass, PassFlags, RenderPass};
pub use renderer::{ClearFlags, MaterialOf, Renderer, SceneOverride};
pub use settings::RenderPassSettings;
pub use state::{AutoClearScope, ClearColorScope, OverrideMaterialScope};

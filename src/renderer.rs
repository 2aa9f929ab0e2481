//! Renderer Collaborator Contract
//!
//! The composer never draws anything itself. Everything that touches the GPU,
//! the scene graph or shader materials is behind the [`Renderer`] and
//! [`SceneOverride`] traits, which the host engine implements.
//!
//! # Required Capabilities
//!
//! | Capability          | Methods                                          |
//! |---------------------|--------------------------------------------------|
//! | Auto-clear toggle   | [`auto_clear`], [`set_auto_clear`]               |
//! | Clear color / alpha | [`clear_color`], [`clear_alpha`], [`set_clear_color`] |
//! | Explicit clears     | [`clear`], [`clear_depth`]                        |
//! | Drawing             | [`render`]                                       |
//!
//! [`auto_clear`]: Renderer::auto_clear
//! [`set_auto_clear`]: Renderer::set_auto_clear
//! [`clear_color`]: Renderer::clear_color
//! [`clear_alpha`]: Renderer::clear_alpha
//! [`set_clear_color`]: Renderer::set_clear_color
//! [`clear`]: Renderer::clear
//! [`clear_depth`]: Renderer::clear_depth
//! [`render`]: Renderer::render

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Buffers affected by [`Renderer::clear`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u8 {
        const COLOR   = 1 << 0;
        const DEPTH   = 1 << 1;
        const STENCIL = 1 << 2;
    }
}

impl Default for ClearFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// A scene whose materials can be replaced wholesale for one render call.
pub trait SceneOverride {
    /// Material handle stored on the scene.
    type Material: Clone;

    fn override_material(&self) -> Option<&Self::Material>;

    /// Replaces the override material. `None` restores per-object materials.
    fn set_override_material(&mut self, material: Option<Self::Material>);
}

/// Material type of a renderer's scene.
pub type MaterialOf<R> = <<R as Renderer>::Scene as SceneOverride>::Material;

/// The external renderer a pass drives.
///
/// Only [`render`](Renderer::render) and the clear operations may fail; state
/// accessors are plain field reads and writes.
pub trait Renderer {
    type Scene: SceneOverride;
    type Camera;
    /// Off-screen render target (one half of the ping-pong pair).
    type Target;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether `render` clears its target before drawing.
    fn auto_clear(&self) -> bool;
    fn set_auto_clear(&mut self, auto_clear: bool);

    fn clear_color(&self) -> Color;
    fn clear_alpha(&self) -> f32;
    fn set_clear_color(&mut self, color: Color, alpha: f32);

    /// Clears `target`, or the screen when `None`.
    fn clear(&mut self, target: Option<&mut Self::Target>, flags: ClearFlags)
    -> Result<(), Self::Error>;

    /// Clears the depth buffer of the currently bound target.
    fn clear_depth(&mut self) -> Result<(), Self::Error>;

    /// Draws `scene` as seen from `camera` into `target`, or the screen when
    /// `None`. `force_clear` clears the target first regardless of
    /// [`auto_clear`](Renderer::auto_clear).
    fn render(
        &mut self,
        scene: &Self::Scene,
        camera: &Self::Camera,
        target: Option<&mut Self::Target>,
        force_clear: bool,
    ) -> Result<(), Self::Error>;
}

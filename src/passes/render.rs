//! Scene Render Pass
//!
//! Draws a scene into the read buffer (or the screen) as one stage of a pass
//! chain. Around the draw call the pass temporarily overrides:
//!
//! - renderer auto-clear (forced off; the pass's own `clear` flag decides)
//! - the scene's override material
//! - the renderer clear color/alpha, when one is configured
//!
//! # Execution Order
//!
//! ```text
//! auto-clear off → override material → clear color → [clear depth] → render
//!                                                                       │
//! auto-clear restored ← override material = None ← clear color restored ┘
//! ```
//!
//! Restoration is driven by the scopes in [`crate::state`], so it also happens
//! when the renderer returns an error or panics.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Pass, PassFlags};
use crate::color::Color;
use crate::renderer::{MaterialOf, Renderer};
use crate::settings::RenderPassSettings;
use crate::state::{AutoClearScope, ClearColorScope, OverrideMaterialScope};

/// Renders a shared scene through a shared camera.
///
/// The scene and camera stay owned by the application; the pass write-locks
/// the scene and read-locks the camera for the duration of one
/// [`render`](Pass::render) call only.
pub struct RenderPass<R: Renderer> {
    scene: Arc<RwLock<R::Scene>>,
    camera: Arc<RwLock<R::Camera>>,

    override_material: Option<MaterialOf<R>>,
    clear_color: Option<Color>,
    clear_alpha: f32,
    clear_depth: bool,

    flags: PassFlags,
}

impl<R: Renderer> RenderPass<R> {
    /// Creates a pass that clears its target, does not clear depth and does
    /// not request a buffer swap.
    #[must_use]
    pub fn new(scene: Arc<RwLock<R::Scene>>, camera: Arc<RwLock<R::Camera>>) -> Self {
        Self::with_settings(scene, camera, &RenderPassSettings::default())
    }

    #[must_use]
    pub fn with_settings(
        scene: Arc<RwLock<R::Scene>>,
        camera: Arc<RwLock<R::Camera>>,
        settings: &RenderPassSettings,
    ) -> Self {
        Self {
            scene,
            camera,
            override_material: None,
            clear_color: settings.clear_color,
            clear_alpha: settings.clear_alpha,
            clear_depth: settings.clear_depth,
            flags: settings.pass_flags(),
        }
    }

    #[must_use]
    pub fn with_override_material(mut self, material: MaterialOf<R>) -> Self {
        self.override_material = Some(material);
        self
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: Color, alpha: f32) -> Self {
        self.clear_color = Some(color);
        self.clear_alpha = alpha;
        self
    }

    // === Accessors ===

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &Arc<RwLock<R::Scene>> {
        &self.scene
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &Arc<RwLock<R::Camera>> {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn override_material(&self) -> Option<&MaterialOf<R>> {
        self.override_material.as_ref()
    }

    pub fn set_override_material(&mut self, material: Option<MaterialOf<R>>) {
        self.override_material = material;
    }

    #[inline]
    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Option<Color>) {
        self.clear_color = color;
    }

    #[inline]
    #[must_use]
    pub fn clear_alpha(&self) -> f32 {
        self.clear_alpha
    }

    pub fn set_clear_alpha(&mut self, alpha: f32) {
        self.clear_alpha = alpha;
    }

    #[inline]
    #[must_use]
    pub fn clear_depth(&self) -> bool {
        self.clear_depth
    }

    pub fn set_clear_depth(&mut self, clear_depth: bool) {
        self.clear_depth = clear_depth;
    }
}

impl<R: Renderer> Pass<R> for RenderPass<R> {
    fn name(&self) -> &str {
        "RenderPass"
    }

    fn flags(&self) -> &PassFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut PassFlags {
        &mut self.flags
    }

    fn render(
        &mut self,
        renderer: &mut R,
        _write_buffer: &mut R::Target,
        read_buffer: &mut R::Target,
        _delta_time: f32,
        _mask_active: bool,
    ) -> Result<(), R::Error> {
        log::trace!(
            "RenderPass: to_screen={} clear={} clear_depth={} clear_color={:?}",
            self.flags.render_to_screen,
            self.flags.clear,
            self.clear_depth,
            self.clear_color.map(Color::to_hex),
        );

        // Scopes drop in reverse: clear color, override material, auto-clear.
        let mut renderer = AutoClearScope::disable(renderer);
        let scene =
            OverrideMaterialScope::assign(self.scene.write(), self.override_material.clone());
        let mut renderer = ClearColorScope::apply(
            &mut *renderer,
            self.clear_color.map(|color| (color, self.clear_alpha)),
        );

        if self.clear_depth {
            renderer.clear_depth()?;
        }

        let camera = self.camera.read();
        let target = if self.flags.render_to_screen {
            None
        } else {
            Some(read_buffer)
        };

        renderer.render(&scene, &camera, target, self.flags.clear)
    }
}

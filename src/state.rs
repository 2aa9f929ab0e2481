//! Scoped Renderer State
//!
//! Passes temporarily override renderer and scene state (auto-clear, clear
//! color, override material) around a single draw. Each override is a guard
//! that captures the prior value on construction and puts it back on drop, so
//! restoration happens on every exit path: normal return, early `?` return and
//! panic unwinding.
//!
//! Guards dereference to the object they guard and can be stacked, each one
//! borrowing through the previous:
//!
//! ```rust,ignore
//! let mut renderer = AutoClearScope::disable(renderer);
//! let mut renderer = ClearColorScope::apply(&mut *renderer, Some((color, alpha)));
//! renderer.render(&scene, &camera, None, true)?;
//! // dropped in reverse: clear color first, then auto-clear
//! ```

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::renderer::{Renderer, SceneOverride};

// ============================================================================
// AutoClearScope
// ============================================================================

/// Overrides [`Renderer::auto_clear`] until dropped.
pub struct AutoClearScope<'r, R: Renderer> {
    renderer: &'r mut R,
    previous: bool,
}

impl<'r, R: Renderer> AutoClearScope<'r, R> {
    pub fn new(renderer: &'r mut R, auto_clear: bool) -> Self {
        let previous = renderer.auto_clear();
        renderer.set_auto_clear(auto_clear);
        Self { renderer, previous }
    }

    /// Forces auto-clear off for the lifetime of the scope.
    pub fn disable(renderer: &'r mut R) -> Self {
        Self::new(renderer, false)
    }

    /// The value restored on drop.
    #[inline]
    #[must_use]
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl<R: Renderer> Deref for AutoClearScope<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer> DerefMut for AutoClearScope<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer> Drop for AutoClearScope<'_, R> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            log::warn!("Restoring renderer auto-clear ({}) during unwind", self.previous);
        }
        self.renderer.set_auto_clear(self.previous);
    }
}

// ============================================================================
// ClearColorScope
// ============================================================================

/// Optionally overrides the renderer clear color/alpha until dropped.
///
/// Built with `None`, the scope neither reads nor writes the renderer's clear
/// state.
pub struct ClearColorScope<'r, R: Renderer> {
    renderer: &'r mut R,
    previous: Option<(Color, f32)>,
}

impl<'r, R: Renderer> ClearColorScope<'r, R> {
    pub fn apply(renderer: &'r mut R, clear: Option<(Color, f32)>) -> Self {
        let previous = clear.map(|(color, alpha)| {
            let saved = (renderer.clear_color(), renderer.clear_alpha());
            renderer.set_clear_color(color, alpha);
            saved
        });
        Self { renderer, previous }
    }

    /// Whether a clear color was applied (and will be restored).
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }
}

impl<R: Renderer> Deref for ClearColorScope<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer> DerefMut for ClearColorScope<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer> Drop for ClearColorScope<'_, R> {
    fn drop(&mut self) {
        if let Some((color, alpha)) = self.previous.take() {
            if std::thread::panicking() {
                log::warn!("Restoring renderer clear color during unwind");
            }
            self.renderer.set_clear_color(color, alpha);
        }
    }
}

// ============================================================================
// OverrideMaterialScope
// ============================================================================

/// Assigns a scene override material and resets it to `None` on drop.
///
/// `G` is anything that mutably dereferences to the scene: a plain `&mut S`
/// or a lock write guard.
pub struct OverrideMaterialScope<G>
where
    G: DerefMut,
    G::Target: SceneOverride,
{
    scene: G,
}

impl<G> OverrideMaterialScope<G>
where
    G: DerefMut,
    G::Target: SceneOverride,
{
    pub fn assign(
        mut scene: G,
        material: Option<<G::Target as SceneOverride>::Material>,
    ) -> Self {
        scene.set_override_material(material);
        Self { scene }
    }
}

impl<G> Deref for OverrideMaterialScope<G>
where
    G: DerefMut,
    G::Target: SceneOverride,
{
    type Target = G::Target;

    fn deref(&self) -> &G::Target {
        &self.scene
    }
}

impl<G> Drop for OverrideMaterialScope<G>
where
    G: DerefMut,
    G::Target: SceneOverride,
{
    fn drop(&mut self) {
        if std::thread::panicking() {
            log::warn!("Clearing scene override material during unwind");
        }
        self.scene.set_override_material(None);
    }
}

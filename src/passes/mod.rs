//! Post-Processing Passes
//!
//! Every stage of a pass chain implements [`Pass`]. The composer only sees the
//! trait: it reads [`PassFlags`] to decide whether to run a pass and whether to
//! swap the ping-pong buffers afterwards, and calls [`Pass::render`] with the
//! current buffer pair.
//!
//! # Built-in Passes
//!
//! - [`RenderPass`]: draws a scene with optional override material and clear color
//! - [`ClearPass`]: clears the read buffer (or the screen)

pub mod clear;
pub mod render;

pub use clear::ClearPass;
pub use render::RenderPass;

use crate::renderer::Renderer;

/// Flags shared by every pass and read by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassFlags {
    /// Disabled passes are skipped by the composer.
    pub enabled: bool,
    /// Whether the pass clears its target before drawing.
    pub clear: bool,
    /// Whether the composer swaps read/write buffers after this pass.
    pub needs_swap: bool,
    /// Render to the screen instead of the read buffer.
    pub render_to_screen: bool,
}

impl Default for PassFlags {
    fn default() -> Self {
        Self {
            enabled: true,
            clear: false,
            needs_swap: true,
            render_to_screen: false,
        }
    }
}

/// One stage of a post-processing chain.
pub trait Pass<R: Renderer> {
    /// Returns the pass name, used in logs and errors.
    fn name(&self) -> &str;

    fn flags(&self) -> &PassFlags;
    fn flags_mut(&mut self) -> &mut PassFlags;

    /// Runs the pass.
    ///
    /// # Parameters
    /// - `write_buffer`: target the next pass will read after a swap
    /// - `read_buffer`: output of the previous pass
    /// - `delta_time`: seconds since the previous frame
    /// - `mask_active`: whether a stencil mask is currently applied
    fn render(
        &mut self,
        renderer: &mut R,
        write_buffer: &mut R::Target,
        read_buffer: &mut R::Target,
        delta_time: f32,
        mask_active: bool,
    ) -> Result<(), R::Error>;
}

//! Clear Pass
//!
//! Clears the read buffer (or the screen) without drawing anything. Useful at
//! the head of a chain, or to reset a target between scene passes. When a clear
//! color is configured it is applied only for the duration of the clear.

use super::{Pass, PassFlags};
use crate::color::Color;
use crate::renderer::{ClearFlags, Renderer};
use crate::state::ClearColorScope;

/// Clears a target with an optional clear color.
#[derive(Debug, Clone)]
pub struct ClearPass {
    clear_color: Option<Color>,
    clear_alpha: f32,
    buffers: ClearFlags,
    flags: PassFlags,
}

impl Default for ClearPass {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearPass {
    /// Clears all buffers with the renderer's current clear color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clear_color: None,
            clear_alpha: 0.0,
            buffers: ClearFlags::all(),
            flags: PassFlags {
                needs_swap: false,
                ..PassFlags::default()
            },
        }
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: Color, alpha: f32) -> Self {
        self.clear_color = Some(color);
        self.clear_alpha = alpha;
        self
    }

    /// Restricts which buffers are cleared.
    #[must_use]
    pub fn with_buffers(mut self, buffers: ClearFlags) -> Self {
        self.buffers = buffers;
        self
    }

    #[inline]
    #[must_use]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    #[inline]
    #[must_use]
    pub fn buffers(&self) -> ClearFlags {
        self.buffers
    }
}

impl<R: Renderer> Pass<R> for ClearPass {
    fn name(&self) -> &str {
        "ClearPass"
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
        log::trace!("ClearPass: buffers={:?} to_screen={}", self.buffers, self.flags.render_to_screen);

        let mut renderer =
            ClearColorScope::apply(renderer, self.clear_color.map(|color| (color, self.clear_alpha)));

        let target = if self.flags.render_to_screen {
            None
        } else {
            Some(read_buffer)
        };

        renderer.clear(target, self.buffers)
    }
}

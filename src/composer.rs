//! Effect Composer
//!
//! `EffectComposer` runs a chain of [`Pass`]es over a ping-pong pair of render
//! targets.
//!
//! # Buffer Flow
//!
//! ```text
//!            ┌──────── swap after each pass with needs_swap ────────┐
//!            ▼                                                      │
//! pass N ── writes ──► write buffer          read buffer ◄── reads ── pass N+1
//! ```
//!
//! The composer does not allocate, resize or present targets; the host hands
//! it two targets and takes them back with [`EffectComposer::reset`] or
//! [`EffectComposer::into_targets`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut composer = EffectComposer::new(target_a, target_b)
//!     .with_pass(RenderPass::new(scene.clone(), camera.clone()))
//!     .with_pass(ClearPass::new());
//!
//! composer.render(&mut renderer, dt)?;
//! ```

use crate::errors::ComposerError;
use crate::passes::Pass;
use crate::renderer::Renderer;

/// Ordered pass chain with ping-pong render targets.
pub struct EffectComposer<R: Renderer> {
    targets: [R::Target; 2],
    /// Index of the write buffer in `targets`; the read buffer is the other one.
    write_index: usize,
    passes: Vec<Box<dyn Pass<R>>>,
    mask_active: bool,
}

impl<R: Renderer> EffectComposer<R> {
    /// Creates an empty chain. `render_target_1` starts as the write buffer,
    /// `render_target_2` as the read buffer.
    #[must_use]
    pub fn new(render_target_1: R::Target, render_target_2: R::Target) -> Self {
        Self {
            targets: [render_target_1, render_target_2],
            write_index: 0,
            passes: Vec::new(),
            mask_active: false,
        }
    }

    // === Chain editing ===

    /// Appends a pass to the end of the chain.
    pub fn add_pass(&mut self, pass: impl Pass<R> + 'static) {
        log::debug!("EffectComposer: add `{}` at {}", pass.name(), self.passes.len());
        self.passes.push(Box::new(pass));
    }

    /// Appends a pass (chained call).
    #[must_use]
    pub fn with_pass(mut self, pass: impl Pass<R> + 'static) -> Self {
        self.add_pass(pass);
        self
    }

    /// Inserts a pass at `index`, or at the end if `index` is past it.
    pub fn insert_pass(&mut self, index: usize, pass: impl Pass<R> + 'static) {
        let index = index.min(self.passes.len());
        log::debug!("EffectComposer: insert `{}` at {index}", pass.name());
        self.passes.insert(index, Box::new(pass));
    }

    /// Removes the first pass named `name`.
    pub fn remove_pass(&mut self, name: &str) -> Option<Box<dyn Pass<R>>> {
        let index = self.passes.iter().position(|p| p.name() == name)?;
        log::debug!("EffectComposer: remove `{name}` from {index}");
        Some(self.passes.remove(index))
    }

    /// Mutable access to the first pass named `name`, e.g. to toggle its flags.
    pub fn pass_mut(&mut self, name: &str) -> Option<&mut (dyn Pass<R> + 'static)> {
        self.passes
            .iter_mut()
            .find(|p| p.name() == name)
            .map(|pass| &mut **pass)
    }

    #[inline]
    #[must_use]
    pub fn passes(&self) -> &[Box<dyn Pass<R>>] {
        &self.passes
    }

    #[inline]
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    // === Buffers ===

    #[inline]
    #[must_use]
    pub fn write_buffer(&self) -> &R::Target {
        &self.targets[self.write_index]
    }

    #[inline]
    #[must_use]
    pub fn read_buffer(&self) -> &R::Target {
        &self.targets[self.write_index ^ 1]
    }

    /// Exchanges the roles of the read and write buffers.
    #[inline]
    pub fn swap_buffers(&mut self) {
        self.write_index ^= 1;
    }

    /// Installs a new target pair and returns the previous one as
    /// `[write, read]`.
    pub fn reset(
        &mut self,
        render_target_1: R::Target,
        render_target_2: R::Target,
    ) -> [R::Target; 2] {
        let mut previous =
            std::mem::replace(&mut self.targets, [render_target_1, render_target_2]);
        if self.write_index == 1 {
            previous.swap(0, 1);
        }
        self.write_index = 0;
        previous
    }

    /// Consumes the composer, returning its targets as `[write, read]`.
    #[must_use]
    pub fn into_targets(self) -> [R::Target; 2] {
        let mut targets = self.targets;
        if self.write_index == 1 {
            targets.swap(0, 1);
        }
        targets
    }

    #[inline]
    #[must_use]
    pub fn mask_active(&self) -> bool {
        self.mask_active
    }

    /// Sets the mask state forwarded to every pass.
    pub fn set_mask_active(&mut self, mask_active: bool) {
        self.mask_active = mask_active;
    }

    // === Execution ===

    /// Runs every enabled pass in order.
    ///
    /// After a pass succeeds, buffers are swapped if it declares `needs_swap`.
    /// The first failing pass stops the chain; its error is returned tagged
    /// with the pass name.
    pub fn render(
        &mut self,
        renderer: &mut R,
        delta_time: f32,
    ) -> Result<(), ComposerError<R::Error>> {
        for pass in &mut self.passes {
            if !pass.flags().enabled {
                continue;
            }

            let (write_buffer, read_buffer) = split_pair(&mut self.targets, self.write_index);

            if let Err(source) =
                pass.render(renderer, write_buffer, read_buffer, delta_time, self.mask_active)
            {
                log::error!("EffectComposer: `{}` failed: {source}", pass.name());
                return Err(ComposerError::Pass {
                    pass: pass.name().to_string(),
                    source,
                });
            }

            if pass.flags().needs_swap {
                self.write_index ^= 1;
            }
        }

        Ok(())
    }
}

/// Splits the pair into `(write, read)`.
fn split_pair<T>(targets: &mut [T; 2], write_index: usize) -> (&mut T, &mut T) {
    let [first, second] = targets;
    if write_index == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

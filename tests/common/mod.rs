//! Recording renderer shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use effect_composer::{
    ClearFlags, Color, Pass, PassFlags, RenderPass, Renderer, SceneOverride,
};
use parking_lot::RwLock;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Scene / Camera / Target
// ============================================================================

#[derive(Debug, Default)]
pub struct TestScene {
    pub override_material: Option<u32>,
}

impl SceneOverride for TestScene {
    type Material = u32;

    fn override_material(&self) -> Option<&u32> {
        self.override_material.as_ref()
    }

    fn set_override_material(&mut self, material: Option<u32>) {
        self.override_material = material;
    }
}

#[derive(Debug, Default)]
pub struct TestCamera {
    pub name: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TestTarget {
    pub id: u32,
}

pub fn shared_scene() -> Arc<RwLock<TestScene>> {
    Arc::new(RwLock::new(TestScene::default()))
}

pub fn shared_camera() -> Arc<RwLock<TestCamera>> {
    Arc::new(RwLock::new(TestCamera { name: "main" }))
}

// ============================================================================
// Recording renderer
// ============================================================================

pub type TestRenderPass = RenderPass<RecordingRenderer>;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ClearDepth,
    Clear {
        target: Option<u32>,
        flags: ClearFlags,
        clear_color: Color,
        clear_alpha: f32,
    },
    Render {
        target: Option<u32>,
        force_clear: bool,
        camera: &'static str,
        override_material: Option<u32>,
        auto_clear: bool,
        clear_color: Color,
        clear_alpha: f32,
    },
    Probe {
        pass: &'static str,
        write: u32,
        read: u32,
        mask_active: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Error,
    Panic,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("renderer failure in {0}")]
pub struct RenderError(pub &'static str);

#[derive(Debug)]
pub struct RecordingRenderer {
    pub auto_clear: bool,
    pub clear_color: Color,
    pub clear_alpha: f32,
    pub events: Vec<Event>,
    pub fail_render: Option<Failure>,
    pub fail_clear_depth: Option<Failure>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self {
            auto_clear: true,
            clear_color: Color::from_hex(0x11_22_33),
            clear_alpha: 1.0,
            events: Vec::new(),
            fail_render: None,
            fail_clear_depth: None,
        }
    }
}

impl RecordingRenderer {
    pub fn renders(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Render { .. }))
            .collect()
    }

    fn fail(failure: Option<Failure>, what: &'static str) -> Result<(), RenderError> {
        match failure {
            None => Ok(()),
            Some(Failure::Error) => Err(RenderError(what)),
            Some(Failure::Panic) => panic!("renderer panicked in {what}"),
        }
    }
}

impl Renderer for RecordingRenderer {
    type Scene = TestScene;
    type Camera = TestCamera;
    type Target = TestTarget;
    type Error = RenderError;

    fn auto_clear(&self) -> bool {
        self.auto_clear
    }

    fn set_auto_clear(&mut self, auto_clear: bool) {
        self.auto_clear = auto_clear;
    }

    fn clear_color(&self) -> Color {
        self.clear_color
    }

    fn clear_alpha(&self) -> f32 {
        self.clear_alpha
    }

    fn set_clear_color(&mut self, color: Color, alpha: f32) {
        self.clear_color = color;
        self.clear_alpha = alpha;
    }

    fn clear(
        &mut self,
        target: Option<&mut TestTarget>,
        flags: ClearFlags,
    ) -> Result<(), RenderError> {
        self.events.push(Event::Clear {
            target: target.map(|t| t.id),
            flags,
            clear_color: self.clear_color,
            clear_alpha: self.clear_alpha,
        });
        Ok(())
    }

    fn clear_depth(&mut self) -> Result<(), RenderError> {
        Self::fail(self.fail_clear_depth, "clear_depth")?;
        self.events.push(Event::ClearDepth);
        Ok(())
    }

    fn render(
        &mut self,
        scene: &TestScene,
        camera: &TestCamera,
        target: Option<&mut TestTarget>,
        force_clear: bool,
    ) -> Result<(), RenderError> {
        self.events.push(Event::Render {
            target: target.map(|t| t.id),
            force_clear,
            camera: camera.name,
            override_material: scene.override_material,
            auto_clear: self.auto_clear,
            clear_color: self.clear_color,
            clear_alpha: self.clear_alpha,
        });
        Self::fail(self.fail_render, "render")
    }
}

// ============================================================================
// Probe pass
// ============================================================================

/// Records the buffer pair it was handed; optionally fails.
pub struct ProbePass {
    pub name: &'static str,
    pub flags: PassFlags,
    pub fail: bool,
}

impl ProbePass {
    pub fn new(name: &'static str, needs_swap: bool) -> Self {
        Self {
            name,
            flags: PassFlags {
                needs_swap,
                ..PassFlags::default()
            },
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.flags.enabled = false;
        self
    }
}

impl Pass<RecordingRenderer> for ProbePass {
    fn name(&self) -> &str {
        self.name
    }

    fn flags(&self) -> &PassFlags {
        &self.flags
    }

    fn flags_mut(&mut self) -> &mut PassFlags {
        &mut self.flags
    }

    fn render(
        &mut self,
        renderer: &mut RecordingRenderer,
        write_buffer: &mut TestTarget,
        read_buffer: &mut TestTarget,
        _delta_time: f32,
        mask_active: bool,
    ) -> Result<(), RenderError> {
        renderer.events.push(Event::Probe {
            pass: self.name,
            write: write_buffer.id,
            read: read_buffer.id,
            mask_active,
        });
        if self.fail {
            return Err(RenderError(self.name));
        }
        Ok(())
    }
}

//! View-facing capability traits
//!
//! The window/rendering layer lives outside this crate. The game core only
//! needs three capabilities from it: something to draw onto, text panels
//! whose content can be replaced, and buttons whose texture slot can be
//! swapped. Everything here is an interface plus the thin `Label` stand-in
//! used by the headless driver and tests.

use glam::Vec2;

/// Primitive draw hooks implemented by the excluded window layer.
pub trait RenderSurface {
    /// Draw a textured coin sprite centered at `pos`, tinted with `color`
    /// (packed 0xRRGGBB).
    fn draw_sprite(&mut self, pos: Vec2, color: u32);
    /// Draw a labeled rectangular panel (text boxes, buttons).
    fn draw_panel(&mut self, center: Vec2, size: Vec2, label: &str);
}

/// Anything the window can draw each frame.
pub trait Drawable {
    fn draw_to(&self, surface: &mut dyn RenderSurface);
}

/// Which of a button's two texture masks is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureSlot {
    /// Between rounds (crystal mask in the original art set).
    #[default]
    Idle,
    /// While a play is running.
    Active,
}

/// A text panel whose displayed content can be replaced.
///
/// Implementations may play a short update cue as a side effect; that is
/// the view layer's business, not the caller's.
pub trait TextView: Drawable {
    fn reset_content(&mut self, content: &str);
}

/// A clickable control: a text view that also carries two texture slots.
pub trait ButtonView: TextView {
    fn swap_texture(&mut self, slot: TextureSlot);
}

/// Minimal in-memory text panel.
///
/// Stands in for the window layer's text shape in the headless driver and
/// in tests; real deployments hand the orchestrator their own `TextView`s.
#[derive(Debug, Clone)]
pub struct Label {
    content: String,
    center: Vec2,
    size: Vec2,
}

impl Label {
    pub fn new(content: impl Into<String>, center: Vec2, size: Vec2) -> Self {
        Self {
            content: content.into(),
            center,
            size,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Drawable for Label {
    fn draw_to(&self, surface: &mut dyn RenderSurface) {
        surface.draw_panel(self.center, self.size, &self.content);
    }
}

impl TextView for Label {
    fn reset_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }
}

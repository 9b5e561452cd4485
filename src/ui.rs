//! Clickable buttons
//!
//! `Button<A>` is a rebindable command slot: binding attaches a command
//! value, a press inside the button yields it, and an unbound press is a
//! no-op. Hover tracking is an Inside/Outside state machine with an
//! edge-triggered `toggled` flag, so the hover cue fires once on entry
//! instead of on every cursor move.

use glam::Vec2;

use crate::audio::{AudioSink, SoundCue};
use crate::platform::WindowEvent;
use crate::view::{ButtonView, Drawable, RenderSurface, TextView, TextureSlot};

/// Where the cursor sits relative to the button, as of the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HoverState {
    /// No cursor movement seen yet.
    #[default]
    Unknown,
    Inside,
    Outside,
}

/// A labeled, rectangular, clickable control carrying at most one bound
/// command.
#[derive(Debug, Clone)]
pub struct Button<A> {
    label: String,
    center: Vec2,
    size: Vec2,
    hover: HoverState,
    toggled: bool,
    action: Option<A>,
    hover_cue: Option<SoundCue>,
    hover_cue_enabled: bool,
    click_cue: Option<SoundCue>,
    click_cue_enabled: bool,
    texture: TextureSlot,
}

impl<A: Copy> Button<A> {
    pub fn new(label: impl Into<String>, center: Vec2, size: Vec2) -> Self {
        Self {
            label: label.into(),
            center,
            size,
            hover: HoverState::Unknown,
            toggled: false,
            action: None,
            hover_cue: None,
            hover_cue_enabled: false,
            click_cue: None,
            click_cue_enabled: false,
            texture: TextureSlot::Idle,
        }
    }

    /// Bind the command a press yields, replacing any previous binding.
    pub fn bind(&mut self, action: A) {
        self.action = Some(action);
    }

    pub fn is_bound(&self) -> bool {
        self.action.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn texture(&self) -> TextureSlot {
        self.texture
    }

    /// Set and enable the cue fired when the cursor enters the button.
    pub fn set_hover_cue(&mut self, cue: SoundCue) {
        self.hover_cue = Some(cue);
        self.hover_cue_enabled = true;
    }

    pub fn enable_hover_cue(&mut self, enable: bool) {
        self.hover_cue_enabled = enable;
    }

    /// Set and enable the cue fired on a press inside the button.
    pub fn set_click_cue(&mut self, cue: SoundCue) {
        self.click_cue = Some(cue);
        self.click_cue_enabled = true;
    }

    pub fn enable_click_cue(&mut self, enable: bool) {
        self.click_cue_enabled = enable;
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.size / 2.0;
        (point.x - self.center.x).abs() <= half.x && (point.y - self.center.y).abs() <= half.y
    }

    /// Feed one window event through the button. A press inside a bound
    /// button returns its command; everything else returns `None`.
    pub fn on_window_event(
        &mut self,
        evnt: &WindowEvent,
        audio: &mut dyn AudioSink,
    ) -> Option<A> {
        match *evnt {
            WindowEvent::MouseMoved(pos) => {
                let next = if self.contains(pos) {
                    HoverState::Inside
                } else {
                    HoverState::Outside
                };
                self.toggled = next != self.hover;
                self.hover = next;

                // cue only on the Outside -> Inside edge
                if self.hover == HoverState::Inside && self.toggled && self.hover_cue_enabled {
                    if let Some(cue) = self.hover_cue {
                        audio.uninterrupted_play(cue);
                    }
                }
                None
            }
            WindowEvent::MousePressed(pos) if self.contains(pos) => {
                if self.click_cue_enabled {
                    if let Some(cue) = self.click_cue {
                        audio.play(cue);
                    }
                }
                self.action
            }
            _ => None,
        }
    }
}

impl<A> Drawable for Button<A> {
    fn draw_to(&self, surface: &mut dyn RenderSurface) {
        surface.draw_panel(self.center, self.size, &self.label);
    }
}

impl<A> TextView for Button<A> {
    fn reset_content(&mut self, content: &str) {
        self.label = content.to_owned();
    }
}

impl<A> ButtonView for Button<A> {
    fn swap_texture(&mut self, slot: TextureSlot) {
        self.texture = slot;
    }
}

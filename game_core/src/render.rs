//! Rendering capability
//!
//! The game draws through [`Surface`] in window coordinates, so the core runs
//! and is tested without any graphics backend.

use glam::Vec2;

use crate::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BUTTON_GREY: Color = Color::rgb(80, 80, 80);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Nominal character size in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize(pub u32);

impl TextSize {
    pub const TITLE: TextSize = TextSize(60);
    pub const LABEL: TextSize = TextSize(30);
    pub const BUTTON: TextSize = TextSize(24);
}

/// Which point of the text `at` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A positioned piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub at: Vec2,
    pub size: TextSize,
    pub anchor: Anchor,
    pub color: Color,
}

impl Text {
    pub fn new(content: impl Into<String>, at: Vec2, size: TextSize) -> Self {
        Self {
            content: content.into(),
            at,
            size,
            anchor: Anchor::TopLeft,
            color: Color::WHITE,
        }
    }

    pub fn centered(content: impl Into<String>, at: Vec2, size: TextSize) -> Self {
        Self {
            anchor: Anchor::Center,
            ..Self::new(content, at, size)
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Something a frame can be drawn onto
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Aabb, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn draw_text(&mut self, text: &Text);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Aabb, Color),
    Circle(Vec2, f32, Color),
    Text(Text),
}

/// Surface that keeps the draw calls of the last frame, for headless runs
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text contents drawn since the last clear, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text) => Some(text.content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, content: &str) -> bool {
        self.texts().iter().any(|text| *text == content)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &Text) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}

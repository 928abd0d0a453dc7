//! Drawing surface abstraction
//!
//! Hosts implement [`DrawSurface`] over whatever they draw with (canvas,
//! terminal, GPU batch). Calls are synchronous with no return value.

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Build a color from a 0xRRGGBB literal
pub const fn rgb(hex: u32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        1.0,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

/// Primitive drawing calls
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Circle centred on (x, y)
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Square with its top-left corner at (x, y)
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: Color) {
        self.fill_rect(x, y, size, size, color);
    }
    /// Text centred horizontally on `x`
    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Text { text: String, x: f32, y: f32, style: TextStyle },
}

/// Surface that just records what was drawn
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style,
        });
    }
}

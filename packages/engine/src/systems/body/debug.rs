/// Default text color for body debug output.
pub const DEFAULT_DEBUG_COLOR: &str = "rgb(255,255,255)";

/// Vertical distance between debug lines, in pixels.
pub const DEBUG_LINE_HEIGHT: f32 = 14.0;

/// Anything that can draw a line of text.
pub trait DebugSurface {
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: String,
}

/// Headless surface that records what would have been drawn.
#[derive(Clone, Debug, Default)]
pub struct TextLog {
    pub lines: Vec<TextLine>,
}

impl TextLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DebugSurface for TextLog {
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.lines.push(TextLine {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
        });
    }
}

//! Box styles for render nodes.

use crate::{Color, EdgeInsets};

/// Line height used for every text node.
pub const DEFAULT_LINE_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Style of a view: padding, fixed height, background and a bottom border.
///
/// Built with chained setters, e.g.
/// `ViewStyle::new().padding(10.0).border_bottom(1.0, Color::BLACK)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewStyle {
    pub padding: EdgeInsets,
    pub height: Option<f32>,
    pub background: Option<Color>,
    pub border_bottom: Option<Border>,
}

impl ViewStyle {
    pub const fn new() -> Self {
        Self {
            padding: EdgeInsets::ZERO,
            height: None,
            background: None,
            border_bottom: None,
        }
    }

    pub const fn padding(mut self, all: f32) -> Self {
        self.padding = EdgeInsets::uniform(all);
        self
    }

    pub const fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn border_bottom(mut self, width: f32, color: Color) -> Self {
        self.border_bottom = Some(Border { width, color });
        self
    }

    pub fn border_bottom_width(&self) -> f32 {
        self.border_bottom.map_or(0.0, |border| border.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

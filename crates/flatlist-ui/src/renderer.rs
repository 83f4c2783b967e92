use crate::{Color, Rect, RenderNode};

/// A paint operation emitted by the headless renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    Fill { rect: Rect, color: Color },
    Text { rect: Rect, value: String, color: Color },
}

/// A collection of render operations for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedRenderScene {
    operations: Vec<RenderOp>,
}

impl RecordedRenderScene {
    pub fn new(operations: Vec<RenderOp>) -> Self {
        Self { operations }
    }

    /// Returns a slice of recorded render operations in submission order.
    pub fn operations(&self) -> &[RenderOp] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<RenderOp> {
        self.operations
    }

    /// Text operations as `(top, value)` pairs in submission order.
    pub fn text_lines(&self) -> impl Iterator<Item = (f32, &str)> {
        self.operations.iter().filter_map(|op| match op {
            RenderOp::Text { rect, value, .. } => Some((rect.y, value.as_str())),
            RenderOp::Fill { .. } => None,
        })
    }
}

/// Walks render trees and lays them out as vertical stacks of fixed width.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessRenderer {
    width: f32,
}

impl HeadlessRenderer {
    pub fn new(width: f32) -> Self {
        Self { width }
    }

    pub fn render(&self, node: &RenderNode, top: f32) -> RecordedRenderScene {
        let mut operations = Vec::new();
        self.render_into(node, top, &mut operations);
        RecordedRenderScene::new(operations)
    }

    /// Appends the operations for `node` placed at `top`.
    pub fn render_into(&self, node: &RenderNode, top: f32, operations: &mut Vec<RenderOp>) {
        let rect = Rect::new(0.0, top, self.width, node.main_axis_size());
        Self::render_node(node, rect, operations);
    }

    fn render_node(node: &RenderNode, rect: Rect, operations: &mut Vec<RenderOp>) {
        match node {
            RenderNode::Text { value, style } => operations.push(RenderOp::Text {
                rect,
                value: value.clone(),
                color: style.color,
            }),
            RenderNode::View { style, children } => {
                if let Some(color) = style.background {
                    operations.push(RenderOp::Fill { rect, color });
                }
                let content = rect.inset(style.padding);
                let mut y = content.y;
                for child in children {
                    let height = child.main_axis_size();
                    let child_rect = Rect::new(content.x, y, content.width, height);
                    Self::render_node(child, child_rect, operations);
                    y += height;
                }
                if let Some(border) = style.border_bottom {
                    operations.push(RenderOp::Fill {
                        rect: Rect::new(
                            rect.x,
                            rect.bottom() - border.width,
                            rect.width,
                            border.width,
                        ),
                        color: border.color,
                    });
                }
            }
        }
    }
}

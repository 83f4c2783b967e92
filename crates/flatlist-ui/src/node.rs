//! Immutable render trees.
//!
//! Item and separator renderers return a [`RenderNode`] describing what to
//! show. Nodes carry no identity and no callbacks, so a tree can be cached,
//! compared and handed to a renderer without touching the list state.

use crate::{TextStyle, ViewStyle};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderNode {
    /// Vertical container.
    View {
        style: ViewStyle,
        children: Vec<RenderNode>,
    },
    Text { value: String, style: TextStyle },
}

impl RenderNode {
    pub fn view(style: ViewStyle, children: impl IntoIterator<Item = RenderNode>) -> Self {
        RenderNode::View {
            style,
            children: children.into_iter().collect(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Text {
            value: value.into(),
            style: TextStyle::default(),
        }
    }

    /// Height of the node when laid out as a vertical stack.
    ///
    /// A view with an explicit height uses it as is; otherwise it is its
    /// vertical padding plus its children plus its bottom border.
    pub fn main_axis_size(&self) -> f32 {
        match self {
            RenderNode::Text { value, style } => {
                let lines = value.split('\n').count().max(1);
                lines as f32 * style.line_height
            }
            RenderNode::View { style, children } => match style.height {
                Some(height) => height,
                None => {
                    let content: f32 = children.iter().map(RenderNode::main_axis_size).sum();
                    style.padding.vertical_sum() + content + style.border_bottom_width()
                }
            },
        }
    }

    /// Text values in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RenderNode::Text { value, .. } => out.push(value),
            RenderNode::View { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DEFAULT_LINE_HEIGHT};

    #[test]
    fn text_height_counts_lines() {
        assert_eq!(RenderNode::text("one").main_axis_size(), DEFAULT_LINE_HEIGHT);
        assert_eq!(
            RenderNode::text("one\ntwo").main_axis_size(),
            2.0 * DEFAULT_LINE_HEIGHT
        );
    }

    #[test]
    fn view_height_sums_padding_children_and_border() {
        let node = RenderNode::view(
            ViewStyle::new().padding(10.0).border_bottom(1.0, Color::BLACK),
            [RenderNode::text("a"), RenderNode::text("b")],
        );
        assert_eq!(node.main_axis_size(), 20.0 + 2.0 * DEFAULT_LINE_HEIGHT + 1.0);
    }

    #[test]
    fn explicit_height_wins() {
        let node = RenderNode::view(ViewStyle::new().height(1.0), [RenderNode::text("ignored")]);
        assert_eq!(node.main_axis_size(), 1.0);
    }

    #[test]
    fn texts_in_document_order() {
        let node = RenderNode::view(
            ViewStyle::new(),
            [
                RenderNode::text("title"),
                RenderNode::view(ViewStyle::new(), [RenderNode::text("nested")]),
            ],
        );
        assert_eq!(node.texts(), vec!["title", "nested"]);
    }
}

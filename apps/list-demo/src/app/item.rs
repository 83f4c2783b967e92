use flatlist_core::InstanceScope;
use flatlist_ui::RenderNode;

use super::expensive::expensive_function;
use super::records::Record;
use super::styles::{ITEM_STYLE, SEPARATOR_STYLE};

/// Renders a row: the title above its derived value.
pub fn render_item(record: &Record, scope: &mut InstanceScope) -> RenderNode {
    render_item_with(record, scope, expensive_function)
}

/// [`render_item`] with the derivation passed in.
///
/// The derived value is memoized on the title for the lifetime of the
/// instance `scope` belongs to.
pub fn render_item_with<F>(record: &Record, scope: &mut InstanceScope, compute: F) -> RenderNode
where
    F: FnOnce(&str) -> String,
{
    let derived = scope.memo(record.title.clone(), |title| compute(title.as_str()));
    RenderNode::view(
        ITEM_STYLE,
        [RenderNode::text(record.title.clone()), RenderNode::text(derived)],
    )
}

pub fn render_separator() -> RenderNode {
    RenderNode::view(SEPARATOR_STYLE, std::iter::empty())
}

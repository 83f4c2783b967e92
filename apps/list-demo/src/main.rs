use anyhow::Context;
use flatlist_core::ItemKey;
use flatlist_foundation::{validate_keys, FlatList, FlatListSpec, ListEntry, ListFrame};
use flatlist_ui::HeadlessRenderer;
use list_demo::app::{build_flat_list, Record};

const VIEWPORT_HEIGHT: f32 = 640.0;
const VIEWPORT_WIDTH: f32 = 360.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut list = build_flat_list(FlatListSpec::default());
    validate_keys(list.config()).context("record list has duplicate keys")?;

    println!("=== Flatlist Demo ===");
    println!("{} records, {}px viewport", list.config().data.len(), VIEWPORT_HEIGHT);
    println!();

    show(&mut list, "initial");

    list.scroll_by(3_000.0);
    show(&mut list, "after scrolling 3000px");

    if !list.scroll_to_key(ItemKey::User(999)) {
        anyhow::bail!("record 999 is missing");
    }
    show(&mut list, "jump to record 999");

    list.scroll_to_item(0, 0.0);
    show(&mut list, "back to the top");

    let stats = list.stats();
    println!("items in use:        {}", stats.items_in_use);
    println!("rows rendered:       {}", stats.total_composed);
    println!("rows reused:         {}", stats.reuse_count);
    println!("rows mounted:        {}", stats.total_mounted);
    println!("rows disposed:       {}", stats.total_disposed);
    println!("separators rendered: {}", stats.separators_rendered);
    Ok(())
}

fn show(list: &mut FlatList<Record>, label: &str) {
    let frame = list.frame(VIEWPORT_HEIGHT);
    log::info!(
        "{}: first visible #{} (+{:.0}px), {} entries placed",
        label,
        frame.first_visible_item_index,
        frame.first_visible_item_scroll_offset,
        frame.entries.len()
    );
    println!("--- {label} ---");
    print_rows(&frame);

    let scene = frame.paint(&HeadlessRenderer::new(VIEWPORT_WIDTH));
    log::debug!("{} paint operations", scene.operations().len());
    println!();
}

fn print_rows(frame: &ListFrame) {
    let visible = frame.visible_item_indices();
    for entry in &frame.entries {
        if let ListEntry::Item {
            index,
            offset,
            node,
            ..
        } = entry
        {
            if visible.contains(index) {
                println!("{:>7.1}  {}", offset, node.texts().join("  |  "));
            }
        }
    }
}

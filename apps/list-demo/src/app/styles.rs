use flatlist_ui::{Color, ViewStyle};

/// Row container: 10px padding and a 1px `#ccc` bottom border.
pub const ITEM_STYLE: ViewStyle = ViewStyle::new()
    .padding(10.0)
    .border_bottom(1.0, Color::from_rgb_u8(0xcc, 0xcc, 0xcc));

/// 1px `#eee` rule between rows.
pub const SEPARATOR_STYLE: ViewStyle = ViewStyle::new()
    .height(1.0)
    .background(Color::from_rgb_u8(0xee, 0xee, 0xee));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_match_their_hex_codes() {
        assert_eq!(
            ITEM_STYLE.border_bottom.map(|border| border.color),
            Color::from_hex("#ccc")
        );
        assert_eq!(SEPARATOR_STYLE.background, Color::from_hex("#eee"));
    }
}

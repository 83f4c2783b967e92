//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                    let nibble = ch.to_digit(16)? as u8;
                    *slot = nibble * 16 + nibble;
                }
                Some(Self::from_rgb_u8(out[0], out[1], out[2]))
            }
            6 => Some(Self::from_rgb_u8(
                channel(digits.get(0..2)?)?,
                channel(digits.get(2..4)?)?,
                channel(digits.get(4..6)?)?,
            )),
            _ => None,
        }
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!(Color::from_hex("#ccc"), Some(Color::from_rgb_u8(0xcc, 0xcc, 0xcc)));
    }

    #[test]
    fn long_hex_parses_channels() {
        assert_eq!(Color::from_hex("#eeeeee"), Some(Color::from_rgb_u8(0xee, 0xee, 0xee)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("ccc"), None);
        assert_eq!(Color::from_hex("#cc"), None);
        assert_eq!(Color::from_hex("#zzz"), None);
    }
}

use domain_shared::color::Color;
use tracing::instrument;

const HEX_DIGITS: usize = 6;

/// Extracts the first `#RRGGBB` token (case-insensitive) from `color_hex`.
///
/// Never fails: input without such a token yields [`Color::WHITE`].
/// Trailing hex digits after the first six are ignored, so `"#1234567"`
/// reads as `0x123456`.
#[instrument(level = "trace")]
pub fn color_from_color_hex(color_hex: &str) -> Color {
    find_color_token(color_hex)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
        .map(Color)
        .unwrap_or(Color::WHITE)
}

fn find_color_token(color_hex: &str) -> Option<&str> {
    let bytes = color_hex.as_bytes();

    bytes
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b'#')
        .map(|(index, _)| index + 1)
        .find(|start| {
            bytes
                .get(*start..*start + HEX_DIGITS)
                .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit))
        })
        // The digits are ASCII, so both ends sit on char boundaries.
        .map(|start| &color_hex[start..start + HEX_DIGITS])
}

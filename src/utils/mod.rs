use lazy_static::lazy_static;
use regex::Regex;

pub mod logging;

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid");
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value.trim())
}

/// `#RGB` or `#RRGGBB` to channel bytes.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if !is_hex_color(value) {
        return None;
    }
    let digits = &value[1..];
    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();

    if digits.len() == 3 {
        let expand = |i: usize| channel(&digits[i..i + 1].repeat(2));
        Some((expand(0)?, expand(1)?, expand(2)?))
    } else {
        Some((channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?))
    }
}

pub fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Empty or whitespace-only text fields travel as `None`.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

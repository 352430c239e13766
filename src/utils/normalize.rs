use crate::structs::qr_request::{EcLevel, QrRequest, RawQrFields, ValidationError};

pub const SIZE_MIN: i64 = 64;
pub const SIZE_MAX: i64 = 1024;
pub const SIZE_DEFAULT: i64 = 320;

pub const MARGIN_MIN: i64 = 0;
pub const MARGIN_MAX: i64 = 20;
pub const MARGIN_DEFAULT: i64 = 4;

pub const DARK_DEFAULT: &str = "#0b1220";
pub const LIGHT_DEFAULT: &str = "#ffffff";

/// Parse `raw` as a base-10 integer and clamp it into `[min, max]`.
/// Missing or unparseable input yields `fallback`.
pub fn clamp_int(raw: Option<&str>, min: i64, max: i64, fallback: i64) -> i64 {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(value)) => value.clamp(min, max),
        _ => fallback,
    }
}

/// Case-insensitive match against the four error-correction symbols;
/// anything else falls back to `M`.
pub fn normalize_level(raw: Option<&str>) -> EcLevel {
    match raw.map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("L") => EcLevel::L,
        Some(s) if s.eq_ignore_ascii_case("M") => EcLevel::M,
        Some(s) if s.eq_ignore_ascii_case("Q") => EcLevel::Q,
        Some(s) if s.eq_ignore_ascii_case("H") => EcLevel::H,
        _ => EcLevel::M,
    }
}

/// Accept only `#` followed by exactly six hex digits; otherwise `fallback`.
pub fn normalize_hex_color(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim) {
        Some(s) if is_hex_color(s) => s.to_string(),
        _ => fallback.to_string(),
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s.as_bytes()[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Shape arbitrary client input into a well-formed `QrRequest`. Empty text
/// is the only condition that blocks generation; every other malformed
/// field is silently coerced to a safe default.
pub fn build_request(raw: RawQrFields) -> Result<QrRequest, ValidationError> {
    let text = raw.text.as_deref().unwrap_or("").trim().to_string();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let size = raw.size.as_ref().map(|v| v.as_text());
    let margin = raw.margin.as_ref().map(|v| v.as_text());

    Ok(QrRequest {
        text,
        size: clamp_int(size.as_deref(), SIZE_MIN, SIZE_MAX, SIZE_DEFAULT) as u32,
        margin: clamp_int(margin.as_deref(), MARGIN_MIN, MARGIN_MAX, MARGIN_DEFAULT) as u32,
        level: normalize_level(raw.level.as_deref()),
        dark: normalize_hex_color(raw.dark.as_deref(), DARK_DEFAULT),
        light: normalize_hex_color(raw.light.as_deref(), LIGHT_DEFAULT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::qr_request::RawScalar;

    #[test]
    fn clamp_int_stays_within_bounds() {
        for raw in ["-100", "0", "10", "64", "500", "1024", "5000"] {
            let clamped = clamp_int(Some(raw), 64, 1024, 320);
            assert!((64..=1024).contains(&clamped), "{raw} clamped to {clamped}");
        }
    }

    #[test]
    fn clamp_int_is_idempotent() {
        for raw in ["-7", "abc", "9999", "320"] {
            let once = clamp_int(Some(raw), 64, 1024, 320);
            let twice = clamp_int(Some(once.to_string().as_str()), 64, 1024, 320);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn clamp_int_fallback_and_edges() {
        assert_eq!(clamp_int(Some("abc"), 64, 1024, 320), 320);
        assert_eq!(clamp_int(Some("5000"), 64, 1024, 320), 1024);
        assert_eq!(clamp_int(Some("10"), 64, 1024, 320), 64);
        assert_eq!(clamp_int(None, 64, 1024, 320), 320);
    }

    #[test]
    fn level_matching_is_case_insensitive() {
        assert_eq!(normalize_level(Some("q")), EcLevel::Q);
        assert_eq!(normalize_level(Some("h")), EcLevel::H);
        assert_eq!(normalize_level(Some("")), EcLevel::M);
        assert_eq!(normalize_level(Some("z")), EcLevel::M);
        assert_eq!(normalize_level(None), EcLevel::M);
    }

    #[test]
    fn hex_colors_require_full_six_digit_form() {
        assert_eq!(normalize_hex_color(Some("#ABCDEF"), "#000000"), "#ABCDEF");
        assert_eq!(normalize_hex_color(Some("#abc123"), "#000000"), "#abc123");
        assert_eq!(normalize_hex_color(Some("red"), "#000000"), "#000000");
        assert_eq!(normalize_hex_color(Some("#abc"), "#000000"), "#000000");
        assert_eq!(normalize_hex_color(Some("#gggggg"), "#000000"), "#000000");
        assert_eq!(normalize_hex_color(None, "#000000"), "#000000");
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let raw = RawQrFields {
            text: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(build_request(raw), Err(ValidationError::EmptyText));
    }

    #[test]
    fn missing_text_is_rejected() {
        assert_eq!(
            build_request(RawQrFields::default()),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn garbage_fields_normalize_to_defaults() {
        let raw = RawQrFields {
            text: Some("hello".to_string()),
            size: Some(RawScalar::Text("9999".to_string())),
            margin: Some(RawScalar::Text("-5".to_string())),
            level: Some("x".to_string()),
            dark: Some("bad".to_string()),
            light: Some("#ffffff".to_string()),
        };
        let request = build_request(raw).unwrap();
        assert_eq!(request.text, "hello");
        assert_eq!(request.size, 1024);
        assert_eq!(request.margin, 0);
        assert_eq!(request.level, EcLevel::M);
        assert_eq!(request.dark, "#0b1220");
        assert_eq!(request.light, "#ffffff");
    }

    #[test]
    fn json_numbers_are_accepted_for_numeric_fields() {
        let raw = RawQrFields {
            text: Some("hello".to_string()),
            size: Some(RawScalar::Int(256)),
            margin: Some(RawScalar::Int(2)),
            ..Default::default()
        };
        let request = build_request(raw).unwrap();
        assert_eq!(request.size, 256);
        assert_eq!(request.margin, 2);
    }

    #[test]
    fn text_is_trimmed() {
        let raw = RawQrFields {
            text: Some("  hello world  ".to_string()),
            ..Default::default()
        };
        assert_eq!(build_request(raw).unwrap().text, "hello world");
    }
}

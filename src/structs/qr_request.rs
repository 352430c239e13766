use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Raw, untrusted fields exactly as they arrive from the form or the JSON
/// API. Everything is optional; the normalizer fills in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RawQrFields {
    pub text: Option<String>,
    pub size: Option<RawScalar>,
    pub margin: Option<RawScalar>,
    pub level: Option<String>,
    pub dark: Option<String>,
    pub light: Option<String>,
}

/// Numeric fields arrive as JSON numbers from the API but as strings from
/// the urlencoded form, so accept either and let the normalizer parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            RawScalar::Int(n) => Cow::Owned(n.to_string()),
            RawScalar::Float(f) => Cow::Owned(f.to_string()),
            RawScalar::Text(s) => Cow::Borrowed(s),
        }
    }
}

/// A validated QR generation request. Once built, every field is within
/// bounds and safe to hand to the encoder without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub text: String,
    pub size: u32,
    pub margin: u32,
    pub level: EcLevel,
    pub dark: String,
    pub light: String,
}

/// Error-correction level of the QR symbol, from lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL or text.")]
    EmptyText,
}

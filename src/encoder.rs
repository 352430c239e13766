use std::io::Cursor;

use actix_web::web;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use qrcode::QrCode;
use thiserror::Error;

use crate::structs::qr_request::{EcLevel, QrRequest};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("QR symbol construction failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("encoding task was interrupted")]
    Interrupted,
}

impl From<EcLevel> for qrcode::EcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

/// Encode a validated request into a PNG data URL on the blocking pool.
/// The response is not produced until this resolves or fails.
pub async fn render_data_url(request: QrRequest) -> Result<String, EncodeError> {
    log::info!(
        "encoding {} bytes at {}px, level {}",
        request.text.len(),
        request.size,
        request.level
    );
    web::block(move || encode_data_url(&request))
        .await
        .map_err(|_| EncodeError::Interrupted)?
}

/// Rasterize the QR symbol for `request` and pack it as a PNG data URL.
pub fn encode_data_url(request: &QrRequest) -> Result<String, EncodeError> {
    let code = QrCode::with_error_correction_level(request.text.as_bytes(), request.level.into())?;
    let modules = code.width() as u32;
    let colors = code.to_colors();

    let dark = parse_hex(&request.dark);
    let light = parse_hex(&request.light);

    // One pixel per module plus the quiet zone, then a nearest-neighbor
    // upscale to the requested edge length so modules stay crisp.
    let framed = modules + 2 * request.margin;
    let mut canvas = RgbImage::from_pixel(framed, framed, light);
    for y in 0..modules {
        for x in 0..modules {
            if colors[(y * modules + x) as usize] == qrcode::Color::Dark {
                canvas.put_pixel(x + request.margin, y + request.margin, dark);
            }
        }
    }
    // A requested size too small to hold the symbol is bumped up to the
    // module grid; shrinking below one pixel per module would drop modules
    // and corrupt the symbol.
    let edge = request.size.max(framed);
    let scaled = imageops::resize(&canvas, edge, edge, FilterType::Nearest);

    let mut png = Vec::new();
    scaled.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

// The normalizer guarantees "#RRGGBB", so per-channel parsing cannot fail;
// the zero default is unreachable.
fn parse_hex(color: &str) -> Rgb<u8> {
    let channel = |i: usize| u8::from_str_radix(&color[i..i + 2], 16).unwrap_or(0);
    Rgb([channel(1), channel(3), channel(5)])
}

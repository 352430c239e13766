use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, Result, web};

use crate::encoder;
use crate::structs::qr_request::RawQrFields;
use crate::utils::normalize::build_request;
use crate::views;

/// JSON endpoint: `{ "dataUrl": … }` on success, `{ "error": … }` otherwise.
pub async fn generate_qr_api(web::Json(raw): web::Json<RawQrFields>) -> Result<impl Responder> {
    let request = match build_request(raw) {
        Ok(request) => request,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    match encoder::render_data_url(request).await {
        Ok(data_url) => Ok(HttpResponse::Ok().json(serde_json::json!({ "dataUrl": data_url }))),
        Err(e) => {
            log::error!("QR encoding failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to generate QR code."
            })))
        }
    }
}

/// Form endpoint: renders the result page with the image or an error message.
pub async fn scan_form(web::Form(raw): web::Form<RawQrFields>) -> Result<impl Responder> {
    let request = match build_request(raw) {
        Ok(request) => request,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .content_type(ContentType::html())
                .body(views::scan_page(Err(&e.to_string()))));
        }
    };

    match encoder::render_data_url(request).await {
        Ok(data_url) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(views::scan_page(Ok(&data_url)))),
        Err(e) => {
            log::error!("QR encoding failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(views::scan_page(Err("Failed to generate QR code."))))
        }
    }
}

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

use crate::views;

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::index_page())
}

pub async fn app_js() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(views::APP_JS)
}

//! HTTP handlers and the helpers they share.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;
use tera::{Context, Tera};

pub mod main;
pub mod products;

/// Answers with `303 See Other` pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders `template` with `200 OK`.
pub fn render_template<T: Serialize>(tera: &Tera, template: &str, data: &T) -> HttpResponse {
    render_template_with_status(tera, StatusCode::OK, template, data)
}

/// Renders `template` with the fields of `data` as its context.
pub fn render_template_with_status<T: Serialize>(
    tera: &Tera,
    status: StatusCode,
    template: &str,
    data: &T,
) -> HttpResponse {
    let context = match Context::from_serialize(data) {
        Ok(context) => context,
        Err(err) => {
            log::error!("Failed to build context for '{template}': {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match tera.render(template, &context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, routes, web};
use serde_json::json;
use tera::Tera;

use crate::dto::products::{ActionResponse, ProductsPageData, ProductsQuery};
use crate::forms::products::ProductForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{render_template, render_template_with_status};
use crate::services::ServiceError;
use crate::services::{export, products};

fn action_reply(status: StatusCode, reply: ActionResponse) -> HttpResponse {
    HttpResponse::build(status).json(reply)
}

/// Maps a failed mutation onto the JSON reply shared by create, edit and delete.
fn action_error(err: ServiceError, not_found: &str, failure: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            action_reply(StatusCode::NOT_FOUND, ActionResponse::error(not_found))
        }
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            action_reply(StatusCode::BAD_REQUEST, ActionResponse::error(message))
        }
        err => action_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            ActionResponse::error(format!("{failure}: {err}")),
        ),
    }
}

#[get("")]
pub async fn show_products(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let request = ProductsQuery::from_query_string(req.query_string())
        .into_page_request(&server_config.catalog);

    match products::load_index_page(repo.get_ref(), &request) {
        Ok(data) => render_template(&tera, "products/index.html", &data),
        Err(err) => {
            log::error!("Failed to render product listing: {err}");
            render_template_with_status(
                &tera,
                StatusCode::INTERNAL_SERVER_ERROR,
                "products/index.html",
                &ProductsPageData::failed(&request, &err),
            )
        }
    }
}

#[get("/new")]
pub async fn new_product(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::load_new_product_form(repo.get_ref()) {
        Ok(data) => render_template(&tera, "products/new.html", &data),
        Err(err) => {
            log::error!("Failed to show new product form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/new")]
pub async fn create_product(
    form: web::Form<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            action_reply(
                StatusCode::OK,
                ActionResponse::ok("Product created successfully"),
            )
        }
        Err(err) => action_error(err, "Product not found", "Error creating product"),
    }
}

#[get("/edit/{product_id}")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products::load_edit_product_form(repo.get_ref(), product_id) {
        Ok(data) => render_template(&tera, "products/edit.html", &data),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().body("Product not found"),
        Err(err) => {
            log::error!("Failed to show product {product_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/edit/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    form: web::Form<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), product_id.into_inner(), form.into_inner()) {
        Ok(_) => action_reply(
            StatusCode::OK,
            ActionResponse::ok("Product updated successfully"),
        ),
        Err(err) => action_error(err, "Product not found", "Error updating product"),
    }
}

#[routes]
#[get("/delete/{product_id}")]
#[delete("/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = product_id.into_inner();

    match products::delete_product(repo.get_ref(), product_id) {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            action_reply(
                StatusCode::OK,
                ActionResponse::ok("Product deleted successfully"),
            )
        }
        Err(err) => action_error(
            err,
            "The specified product does not exist",
            "Error deleting product",
        ),
    }
}

#[routes]
#[get("/export/csv")]
#[get("/csv")]
pub async fn export_products_csv(repo: web::Data<DieselRepository>) -> impl Responder {
    match export::export_csv(repo.get_ref()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename("products.csv".to_string())],
                },
            ))
            .body(body),
        Err(err) => {
            log::error!("Failed to export products as CSV: {err}");
            HttpResponse::InternalServerError().body(format!("Error exporting products: {err}"))
        }
    }
}

/// Printable listing; the PDF routes serve it for the browser to print.
#[routes]
#[get("/export/html")]
#[get("/export/pdf")]
#[get("/pdf")]
pub async fn export_products_html(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match export::load_all_products(repo.get_ref()) {
        Ok(products) => render_template(
            &tera,
            "products/export.html",
            &json!({ "products": products }),
        ),
        Err(err) => {
            log::error!("Failed to export products as HTML: {err}");
            HttpResponse::InternalServerError().body(format!("Error exporting products: {err}"))
        }
    }
}

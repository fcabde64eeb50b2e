use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::products::ProductDto;
use crate::repository::DieselRepository;
use crate::routes::{PageParams, error_response};
use crate::services::products::{
    delete as delete_product_service, find_all_paged as list_products_service,
    find_by_id as show_product_service, insert as add_product_service,
    update as update_product_service,
};

#[get("/products")]
pub async fn list_products(
    request: HttpRequest,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products_service(params.into_inner().into(), repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, request.path()),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    request: HttpRequest,
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, request.path()),
    }
}

#[post("/products")]
pub async fn add_product(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<ProductDto>,
) -> impl Responder {
    match add_product_service(dto, repo.get_ref()) {
        Ok(product) => {
            let location = format!("/products/{}", product.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header(("Location", location))
                .json(product)
        }
        Err(err) => error_response(err, request.path()),
    }
}

#[put("/products/{product_id}")]
pub async fn update_product(
    request: HttpRequest,
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<ProductDto>,
) -> impl Responder {
    match update_product_service(product_id.into_inner(), dto, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, request.path()),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    request: HttpRequest,
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, request.path()),
    }
}

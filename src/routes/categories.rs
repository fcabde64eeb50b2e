use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::categories::CategoryDto;
use crate::repository::DieselRepository;
use crate::routes::{PageParams, error_response};
use crate::services::categories::{
    delete as delete_category_service, find_all_paged as list_categories_service,
    find_by_id as show_category_service, insert as add_category_service,
    update as update_category_service,
};

#[get("/categories")]
pub async fn list_categories(
    request: HttpRequest,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_categories_service(params.into_inner().into(), repo.get_ref()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, request.path()),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    request: HttpRequest,
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match show_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, request.path()),
    }
}

#[post("/categories")]
pub async fn add_category(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<CategoryDto>,
) -> impl Responder {
    match add_category_service(dto, repo.get_ref()) {
        Ok(category) => {
            let location = format!("/categories/{}", category.id.unwrap_or_default());
            HttpResponse::Created()
                .insert_header(("Location", location))
                .json(category)
        }
        Err(err) => error_response(err, request.path()),
    }
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    request: HttpRequest,
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(dto): web::Json<CategoryDto>,
) -> impl Responder {
    match update_category_service(category_id.into_inner(), dto, repo.get_ref()) {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, request.path()),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    request: HttpRequest,
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_category_service(category_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, request.path()),
    }
}

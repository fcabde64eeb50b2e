use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE_SIZE, Direction, PageRequest, SortField};
use crate::services::ServiceError;

pub mod categories;
pub mod products;

/// Body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct StandardError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    pub path: String,
}

/// Paging parameters accepted by the list endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<usize>,
    pub lines_per_page: Option<usize>,
    pub direction: Option<Direction>,
    pub order_by: Option<SortField>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(
            params.page.unwrap_or(0),
            params.lines_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .sorted(
            params.order_by.unwrap_or_default(),
            params.direction.unwrap_or_default(),
        )
    }
}

/// Translate a service failure into its HTTP status and error body.
pub fn error_response(err: ServiceError, path: &str) -> HttpResponse {
    let (status, error) = match &err {
        ServiceError::ResourceNotFound(_) => (StatusCode::NOT_FOUND, "Resource not found"),
        ServiceError::Database(_) => (StatusCode::BAD_REQUEST, "Database exception"),
        ServiceError::Validation(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "Validation exception")
        }
        ServiceError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };

    standard_error(status, error, err.to_string(), path)
}

fn standard_error(
    status: StatusCode,
    error: &'static str,
    message: String,
    path: &str,
) -> HttpResponse {
    HttpResponse::build(status).json(StandardError {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error,
        message,
        path: path.to_string(),
    })
}

/// Bodies that fail to deserialize are reported like any other invalid input.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = standard_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Validation exception",
        err.to_string(),
        req.path(),
    );
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = standard_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Validation exception",
        err.to_string(),
        req.path(),
    );
    InternalError::from_response(err, response).into()
}

/// Register every catalog route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(categories::list_categories)
        .service(categories::show_category)
        .service(categories::add_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        .service(products::list_products)
        .service(products::show_product)
        .service(products::add_product)
        .service(products::update_product)
        .service(products::delete_product);
}

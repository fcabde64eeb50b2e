use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use catalog_admin::repository::DieselRepository;
use catalog_admin::routes::configure;
use serde_json::{Value, json};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn category_lifecycle_over_http() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "id": 500, "name": "Books" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("location header");
    let created: Value = test::read_body_json(response).await;
    let id = created["id"].as_i64().expect("assigned id");
    assert_ne!(id, 500);
    assert_eq!(location, format!("/categories/{id}"));

    let request = test::TestRequest::put()
        .uri(&format!("/categories/{id}"))
        .set_json(json!({ "id": 999, "name": "Novels" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(updated, json!({ "id": id, "name": "Novels" }));

    let request = test::TestRequest::get().uri("/categories").to_request();
    let page: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 12);
    assert_eq!(page["items"][0]["name"], "Novels");

    let request = test::TestRequest::delete()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = test::TestRequest::get()
        .uri(&format!("/categories/{id}"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Resource not found");
    assert_eq!(body["path"], format!("/categories/{id}"));
}

#[actix_web::test]
async fn deleting_a_referenced_category_is_a_bad_request() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Electronics" }))
        .to_request();
    let category: Value = test::call_and_read_body_json(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({ "name": "Smart TV", "categories": [{ "id": category["id"] }] }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = test::TestRequest::delete()
        .uri(&format!("/categories/{}", category["id"]))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Integrity violation");
}

#[actix_web::test]
async fn invalid_payloads_are_unprocessable() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({ "name": "TV" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn undecodable_bodies_use_the_standard_error_body() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "id": 1 }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["status"], 422);
    assert_eq!(body["error"], "Validation exception");
    assert_eq!(body["path"], "/categories");
    assert!(body["timestamp"].is_string());

    let request = test::TestRequest::put()
        .uri("/products/1")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["path"], "/products/1");

    let request = test::TestRequest::get()
        .uri("/products?direction=sideways")
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn huge_page_numbers_return_an_empty_page() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/categories")
        .set_json(json!({ "name": "Books" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = test::TestRequest::get()
        .uri("/categories?page=9223372036854775807")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["items"], json!([]));
}

#[actix_web::test]
async fn unknown_product_category_is_not_found() {
    let test_db = common::TestDb::new();
    let app = init_app!(test_db);

    let request = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({ "name": "Laptop", "categories": [{ "id": 77 }] }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let request = test::TestRequest::put()
        .uri("/products/5")
        .set_json(json!({ "name": "Laptop" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

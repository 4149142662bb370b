use actix_web::{http::StatusCode, test, web, App};
use orthobasis::config::*;
use orthobasis::engine::*;
use orthobasis::independence_checker::*;
use orthobasis::service::{self, SharedEngine};
use serde_json::{json, Value};

fn engine_with(policy : DeterminantPolicy) -> web::Data<SharedEngine> {
    web::Data::new(GramSchmidtEngine::new(IndependenceChecker::new(policy), Default::default()))
}

async fn post_matrix(body : Value) -> (StatusCode, Value) {
    post_with(DeterminantPolicy::TruncateToInteger, body).await
}

async fn post_with(policy : DeterminantPolicy, body : Value) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new().configure(service::configure(engine_with(policy), DEFAULT_MAX_JSON_BYTES))
    ).await;
    let req = test::TestRequest::post().uri("/Group2").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body : Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn independent_input_returns_string_grid() {
    let (status, body) = post_matrix(json!({"matrix": [[1, 0], [1, 1]]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": [["1", "0"], ["0", "1"]]}));
}

#[actix_web::test]
async fn dependent_input_returns_zero_flag() {
    let (status, body) = post_matrix(json!({"matrix": [[1, 2], [2, 4]]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": 0}));
    assert!(body["result"].is_number());
}

#[actix_web::test]
async fn small_determinant_follows_policy() {
    let matrix = json!({"matrix": [[0.5, 0], [0, 1]]});
    let (_, truncated) = post_matrix(matrix.clone()).await;
    assert_eq!(truncated, json!({"result": 0}));

    let (status, exact) = post_with(DeterminantPolicy::Exact, matrix).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exact, json!({"result": [["1", "0"], ["0", "1"]]}));
}

#[actix_web::test]
async fn wide_input_is_rendered_symbolically() {
    let (status, body) = post_matrix(json!({"matrix": [[1, 1, 0], [1, 0, 1]]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": [
        ["sqrt(2)/2", "sqrt(2)/2", "0"],
        ["sqrt(6)/6", "-sqrt(6)/6", "sqrt(6)/3"]
    ]}));
}

#[actix_web::test]
async fn ragged_matrix_is_bad_request() {
    let (status, body) = post_matrix(json!({"matrix": [[1, 2], [3]]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("row 1"));
}

#[actix_web::test]
async fn empty_matrix_is_bad_request() {
    let (status, body) = post_matrix(json!({"matrix": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn non_numeric_entry_is_bad_request() {
    let (status, body) = post_matrix(json!({"matrix": [[1, "two"], [3, 4]]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn missing_matrix_field_is_bad_request() {
    let (status, _) = post_matrix(json!({"vectors": [[1, 0]]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn overflowing_norms_are_server_errors() {
    //Independent by rank, but the squared norms overflow during Gram-Schmidt
    let (status, body) = post_matrix(json!({"matrix": [[1e200, 0, 0], [0, 1e200, 0]]})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn index_serves_html() {
    let app = test::init_service(
        App::new().configure(service::configure(engine_with(DeterminantPolicy::default()), DEFAULT_MAX_JSON_BYTES))
    ).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("/Group2"));
}

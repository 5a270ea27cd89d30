//! HTTP-level tests for the Blockpress API

use axum::{
    body::Bytes,
    http::{header, HeaderValue, Method, StatusCode},
};
use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use blockpress::{
    api::{self, AppState},
    config::Config,
    db::DetachedRepository,
};

const FRONTEND: &str = "http://localhost:5173";

fn server_with(config: Config) -> TestServer {
    let state = AppState::new(config, DetachedRepository::repositories());
    let app = api::build_router(state).unwrap();
    TestServer::new(app).unwrap()
}

fn server() -> TestServer {
    server_with(Config::default())
}

fn assert_envelope(body: &Value, success: bool) {
    assert_eq!(body["success"], json!(success));
    assert_eq!(body["version"], json!("1.0.0"));
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());
    assert!(body["data"].is_object());
    assert!(body["meta"].is_object());
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_list_pages_is_empty_with_pagination() {
    let response = server().get("/api/v1/pages").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_envelope(&body, true);
    assert_eq!(body["message"], json!("Operation completed successfully"));
    assert_eq!(body["data"]["pages"], json!([]));
    assert_eq!(body["pagination"]["total_items"], json!(0));
    assert_eq!(body["pagination"]["current_page"], json!(1));
}

#[tokio::test]
async fn test_get_page_is_not_found() {
    let response = server().get("/api/v1/pages/anything").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["message"], json!("Page not found"));
    assert_eq!(body["meta"]["code"], json!("NOT_FOUND"));
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn test_create_page_stamps_fields() {
    let before = Utc::now();
    let response = server()
        .post("/api/v1/pages")
        .json(&json!({ "title": "About Us" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_envelope(&body, true);
    assert_eq!(body["message"], json!("Page created successfully"));

    let page = &body["data"]["page"];
    assert!(!page["id"].as_str().unwrap().is_empty());
    assert_eq!(page["slug"], json!("about-us"));
    assert_eq!(page["status"], json!("draft"));
    assert_eq!(page["author"]["id"], json!("user-1"));
    assert!(timestamp(&page["created_at"]) >= before);
    assert_eq!(page["created_at"], page["updated_at"]);
}

#[tokio::test]
async fn test_update_page_uses_path_id_and_refreshes_timestamp() {
    let before = Utc::now();
    let response = server()
        .put("/api/v1/pages/p-42")
        .json(&json!({
            "id": "other",
            "title": "Home",
            "slug": "home",
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-01-01T00:00:00Z"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], json!("Page updated successfully"));
    let page = &body["data"]["page"];
    assert_eq!(page["id"], json!("p-42"));
    assert_eq!(page["created_at"], json!("2020-01-01T00:00:00Z"));
    assert!(timestamp(&page["updated_at"]) >= before);
}

#[tokio::test]
async fn test_delete_page() {
    let response = server().delete("/api/v1/pages/p-1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_envelope(&body, true);
    assert_eq!(body["message"], json!("Page deleted successfully"));
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn test_create_page_keeps_unlisted_status() {
    let response = server()
        .post("/api/v1/pages")
        .json(&json!({ "title": "Old news", "status": "archived" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["page"]["status"], json!("archived"));
}

#[tokio::test]
async fn test_page_widgets_is_empty_map() {
    let response = server().get("/api/v1/pages/p-1/widgets").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["widgets"], json!({}));
}

#[tokio::test]
async fn test_reorder_accepts_both_body_shapes() {
    let server = server();

    for body in [json!(["w2", "w1"]), json!({ "widget_ids": ["w2", "w1"] })] {
        let response = server
            .post("/api/v1/pages/p-1/widgets/reorder")
            .json(&body)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], json!("Widgets reordered successfully"));
    }
}

#[tokio::test]
async fn test_create_widget_fills_default_props() {
    let before = Utc::now();
    let response = server()
        .post("/api/v1/widgets")
        .json(&json!({ "type": "heading", "page_id": "p-1" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], json!("Widget created successfully"));
    let widget = &body["data"]["widget"];
    assert_eq!(widget["type"], json!("heading"));
    assert_eq!(widget["props"]["level"], json!(2));
    assert!(timestamp(&widget["created_at"]) >= before);
}

#[tokio::test]
async fn test_update_widget_refreshes_timestamp() {
    let before = Utc::now();
    let response = server()
        .put("/api/v1/widgets/w-9")
        .json(&json!({
            "type": "text",
            "page_id": "p-1",
            "updated_at": "2020-01-01T00:00:00Z"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], json!("Widget updated successfully"));
    assert_eq!(body["data"]["widget"]["id"], json!("w-9"));
    assert!(timestamp(&body["data"]["widget"]["updated_at"]) >= before);
}

#[tokio::test]
async fn test_delete_widget() {
    let response = server().delete("/api/v1/widgets/w-1").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Widget deleted successfully"));
}

#[tokio::test]
async fn test_widget_types_catalog() {
    let response = server().get("/api/v1/widgets/types").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let types = body["data"]["types"].as_array().unwrap();
    assert_eq!(types.len(), 7);
    assert!(types.iter().any(|t| t["type"] == json!("image")));
}

#[tokio::test]
async fn test_media_upload_records_file() {
    let form = MultipartForm::new()
        .add_text("alt_text", "Team photo")
        .add_text("tags", "team, office")
        .add_part(
            "file",
            Part::bytes(vec![0u8; 128])
                .file_name("team.png")
                .mime_type("image/png"),
        );

    let response = server().post("/api/v1/media/upload").multipart(form).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], json!("Media uploaded successfully"));
    let media = &body["data"]["media"];
    assert_eq!(media["filename"], json!("team.png"));
    assert_eq!(media["url"], json!("/media/team.png"));
    assert_eq!(media["mime_type"], json!("image/png"));
    assert_eq!(media["size"], json!(128));
    assert_eq!(media["alt_text"], json!("Team photo"));
    assert_eq!(media["tags"], json!(["team", "office"]));
    assert_eq!(media["uploaded_by"]["id"], json!("user-1"));
}

#[tokio::test]
async fn test_media_upload_without_file_is_rejected() {
    let form = MultipartForm::new().add_text("alt_text", "nothing");

    let response = server().post("/api/v1/media/upload").multipart(form).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["meta"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_media_upload_respects_body_limit() {
    let mut config = Config::default();
    config.upload.max_body_size = 64;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![1u8; 4096]).file_name("big.bin"),
    );

    let response = server_with(config)
        .post("/api/v1/media/upload")
        .multipart(form)
        .await;
    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_media_upload_with_non_multipart_body_uses_error_envelope() {
    let response = server()
        .post("/api/v1/media/upload")
        .json(&json!({ "file": "not-a-file" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["meta"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn test_links() {
    let server = server();

    let response = server.get("/api/v1/links").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["links"], json!([]));

    let response = server
        .post("/api/v1/links")
        .json(&json!({ "title": "Docs", "url": "https://docs.rs", "target": "_blank" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Link created successfully"));
    assert_eq!(body["data"]["link"]["rel"], json!("noopener noreferrer"));
}

#[tokio::test]
async fn test_create_link_keeps_free_form_type_and_status() {
    let response = server()
        .post("/api/v1/links")
        .json(&json!({
            "title": "Wiki",
            "url": "/wiki",
            "type": "internal",
            "status": "hidden"
        }))
        .await;
    response.assert_status_ok();

    let link = &response.json::<Value>()["data"]["link"];
    assert_eq!(link["type"], json!("internal"));
    assert_eq!(link["status"], json!("hidden"));
    assert_eq!(link["target"], json!("_self"));
}

#[tokio::test]
async fn test_settings_endpoints() {
    let server = server();

    let response = server.get("/api/v1/settings").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["settings"]["site_name"], json!("Enhanced CMS"));

    let response = server
        .put("/api/v1/settings")
        .json(&json!({ "site_name": "Docs" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Settings updated successfully"));
    assert_eq!(body["data"]["settings"]["site_name"], json!("Docs"));

    let response = server.post("/api/v1/settings/reset").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Settings reset to defaults"));
    assert_eq!(body["data"]["settings"]["site_name"], json!("Enhanced CMS"));
}

#[tokio::test]
async fn test_current_user() {
    let response = server().get("/api/v1/users/me").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["user"]["id"], json!("user-1"));
    assert_eq!(body["data"]["user"]["role"], json!("admin"));
}

#[tokio::test]
async fn test_export_defaults_to_json() {
    let response = server().get("/api/v1/export").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], json!("Data exported successfully"));
    assert_eq!(body["meta"]["format"], json!("json"));
    for key in ["pages", "media", "links", "users"] {
        assert_eq!(body["data"][key], json!([]), "{key}");
    }
    assert_eq!(body["data"]["widgets"], json!({}));
    assert_eq!(body["data"]["settings"], json!({}));
}

#[tokio::test]
async fn test_export_echoes_format() {
    let response = server().get("/api/v1/export?format=csv").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["meta"]["format"], json!("csv"));
}

#[tokio::test]
async fn test_import_accepts_any_object() {
    let response = server()
        .post("/api/v1/import")
        .json(&json!({ "pages": [{ "title": "x" }], "anything": true }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Data imported successfully"));
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let response = server()
        .post("/api/v1/pages")
        .bytes(Bytes::from_static(b"{\"title\": "))
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["meta"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn test_missing_required_field_is_unprocessable() {
    let response = server()
        .post("/api/v1/widgets")
        .json(&json!({ "type": "text" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["meta"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let response = server().get("/api/v1/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Resource not found"));
}

#[tokio::test]
async fn test_unsupported_method_uses_error_envelope() {
    let response = server().patch("/api/v1/pages").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["message"], json!("Method not allowed"));
    assert_eq!(body["meta"]["code"], json!("METHOD_NOT_ALLOWED"));
}

#[tokio::test]
async fn test_bad_query_uses_error_envelope() {
    let response = server().get("/api/v1/export?format=json&format=csv").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_envelope(&body, false);
    assert_eq!(body["meta"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let response = server()
        .get("/api/v1/pages")
        .add_header(header::ORIGIN, HeaderValue::from_static(FRONTEND))
        .await;
    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), FRONTEND);
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let response = server()
        .get("/api/v1/pages")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
        .await;
    response.assert_status_ok();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight_from_other_origin_is_not_allowed() {
    let response = server()
        .method(Method::OPTIONS, "/api/v1/pages")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight_mirrors_request() {
    let response = server()
        .method(Method::OPTIONS, "/api/v1/pages/p-1")
        .add_header(header::ORIGIN, HeaderValue::from_static(FRONTEND))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("DELETE"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type,x-custom"),
        )
        .await;
    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), FRONTEND);
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "DELETE");
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type,x-custom"
    );
}

#[tokio::test]
async fn test_configured_origin_is_used() {
    let mut config = Config::default();
    config.server.cors_origin = "https://admin.example.com".to_string();

    let response = server_with(config)
        .get("/api/v1/settings")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://admin.example.com"))
        .await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://admin.example.com"
    );
}

mod common;

use beacon::utils::config::CorsSettings;
use reqwest::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};

use common::{spawn_app, spawn_app_with_cors};

async fn preflight(address: &str, origin: &str) -> reqwest::Response {
    reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{address}/api/status"))
        .header(ORIGIN, origin)
        .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn wildcard_allows_any_origin_without_credentials() {
    let app = spawn_app().await;

    let response = preflight(&app.address, "https://anywhere.example.com").await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    assert!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}

#[tokio::test]
async fn explicit_list_allows_listed_origin_with_credentials() {
    let app = spawn_app_with_cors(CorsSettings::from_values(
        "https://app.example.com, https://admin.example.com",
        Some("true"),
    ))
    .await;

    let response = preflight(&app.address, "https://admin.example.com").await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://admin.example.com"
    );
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn explicit_list_rejects_unlisted_origin() {
    let app = spawn_app_with_cors(CorsSettings::from_values("https://app.example.com", None)).await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/", app.address))
        .header(ORIGIN, "https://evil.example.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

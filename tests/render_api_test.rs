use std::sync::{Arc, Mutex};

use base64::{Engine as _, engine::general_purpose};
use carbon_render::core::{Error, ImageRenderer, Language, RenderOptions, Result, WindowTheme};
use carbon_render::settings::Config;
use carbon_render::{AppState, init_openapi_route};
use poem::{http::StatusCode, test::TestClient};
use serde_json::{Value, json};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

#[derive(Default)]
struct StubRenderer {
    seen: Mutex<Vec<(String, RenderOptions)>>,
    missing_element: bool,
    connection_lost: bool,
}

impl ImageRenderer for StubRenderer {
    fn render(&self, code: &str, options: &RenderOptions) -> Result<Vec<u8>> {
        self.seen
            .lock()
            .unwrap()
            .push((code.to_string(), options.clone()));
        if self.connection_lost {
            return Err(Error::Automation(anyhow::anyhow!(
                "underlying connection is closed"
            )));
        }
        if self.missing_element {
            return Err(Error::ElementNotFound {
                selector: "#export-container .container-bg".to_string(),
            });
        }
        Ok(PNG.to_vec())
    }
}

fn client(renderer: Arc<StubRenderer>) -> TestClient<impl poem::Endpoint> {
    let app_state = Arc::new(AppState { renderer });
    TestClient::new(init_openapi_route(app_state, &Config::default()))
}

#[tokio::test]
async fn test_render_returns_png() {
    let renderer = Arc::new(StubRenderer::default());
    let cli = client(renderer.clone());

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({ "code": "print(1)" }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_vec().await.unwrap();
    assert_eq!(body, PNG);

    let seen = renderer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "print(1)");
    assert_eq!(seen[0].1, RenderOptions::default());
}

#[tokio::test]
async fn test_render_passes_options_through() {
    let renderer = Arc::new(StubRenderer::default());
    let cli = client(renderer.clone());

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({
            "code": "fn main() {}",
            "options": {
                "language": "Rust",
                "window_theme": "bw",
                "theme": "dracula-pro",
                "line_numbers": true,
                "first_line_number": 19,
                "scale_factor": 3,
                "background_color": "#ADB7C1"
            }
        }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let seen = renderer.seen.lock().unwrap();
    let options = &seen[0].1;
    assert_eq!(options.language(), Language::Rust);
    assert_eq!(options.window_theme(), WindowTheme::Outlined);
    assert_eq!(options.theme(), "dracula-pro");
    assert!(options.line_numbers());
    assert_eq!(options.first_line_number(), 19);
    assert_eq!(options.scale_factor(), 3);
    assert_eq!(options.background_color(), "#ADB7C1");
    assert_eq!(options.font_family(), "Hack");
}

#[tokio::test]
async fn test_render_base64() {
    let cli = client(Arc::new(StubRenderer::default()));

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({ "code": "x", "return_base64": true }))
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    let parsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["mime_type"], "image/png");
    assert_eq!(
        general_purpose::STANDARD
            .decode(parsed["data"].as_str().unwrap())
            .unwrap(),
        PNG
    );
}

#[tokio::test]
async fn test_unknown_language_is_bad_request() {
    let renderer = Arc::new(StubRenderer::default());
    let cli = client(renderer.clone());

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({ "code": "x", "options": { "language": "klingon" } }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("klingon"));
    assert!(renderer.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_element_is_bad_gateway() {
    let renderer = Arc::new(StubRenderer {
        missing_element: true,
        ..Default::default()
    });
    let cli = client(renderer);

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({ "code": "x" }))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_GATEWAY);

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("target element not found"));
}

#[tokio::test]
async fn test_browser_failure_is_internal_error() {
    let renderer = Arc::new(StubRenderer {
        connection_lost: true,
        ..Default::default()
    });
    let cli = client(renderer);

    let resp = cli
        .post("/render")
        .content_type("application/json")
        .body_json(&json!({ "code": "x" }))
        .send()
        .await;
    resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("underlying connection is closed"));
    assert!(!body.contains("target element not found"));
}

#[tokio::test]
async fn test_list_languages() {
    let cli = client(Arc::new(StubRenderer::default()));

    let resp = cli.get("/languages").send().await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    let languages: Value = serde_json::from_str(&body).unwrap();
    let languages = languages.as_array().unwrap();
    assert_eq!(languages.len(), Language::ALL.len());
    assert_eq!(languages[0]["name"], "Auto");
    assert_eq!(languages[0]["mode"], "auto");
    assert!(
        languages
            .iter()
            .any(|l| l["name"] == "CPlusPlus" && l["mode"] == "text/x-c++src")
    );
}

#[tokio::test]
async fn test_health() {
    let cli = client(Arc::new(StubRenderer::default()));

    let resp = cli.get("/health").send().await;
    resp.assert_status(StatusCode::OK);

    let body = resp.0.into_body().into_string().await.unwrap();
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"].as_str().unwrap(), "healthy");
}

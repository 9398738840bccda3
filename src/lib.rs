//! Render code snippets into images through [carbon.now.sh](https://carbon.now.sh).
//!
//! The core builds the Carbon URL for a snippet and a set of
//! [`RenderOptions`](core::RenderOptions), drives a browser to it and returns a
//! PNG clipped to the rendered output. A small HTTP service is layered on top.
//!
//! ```no_run
//! use carbon_render::core::chrome::{ChromeConfig, HeadlessChrome};
//! use carbon_render::core::{CarbonClient, Language, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CarbonClient::new(HeadlessChrome::new(ChromeConfig::default())?);
//! let options = RenderOptions::builder()
//!     .language(Language::Rust)
//!     .theme("dracula-pro")
//!     .build();
//! let png = client.render_with_options("fn main() {}", &options)?;
//! std::fs::write("snippet.png", png)?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use poem::{
    EndpointExt, Route,
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
};
use poem_openapi::OpenApiService;

use crate::core::ImageRenderer;
use crate::routes::render::ApiRender;
use crate::settings::Config;

pub mod core;
pub mod routes;
pub mod schemas;
pub mod settings;

pub struct AppState {
    pub renderer: Arc<dyn ImageRenderer>,
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route =
        OpenApiService::new(ApiRender, "Carbon Render API", "1.0").server(prefix.clone());

    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
}

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use poem::web::Data;
use poem_openapi::{
    OpenApi, Tags,
    payload::{Attachment, Json},
};

use crate::{
    AppState,
    core::{Error, Language, RenderOptions, render_in_background},
    schemas::{
        common::{BadGatewayResponse, BadRequestResponse, InternalServerErrorResponse},
        render::{Base64Response, LanguageEntry, RenderRequest, RenderResponse},
    },
};

#[derive(Tags)]
enum ApiRenderTags {
    Render,
}

pub struct ApiRender;

#[OpenApi()]
impl ApiRender {
    /// Render
    ///
    /// Render a code snippet into a PNG image through carbon.now.sh.
    ///
    /// # Example Request
    /// ```json
    /// {
    ///   "code": "fn main() {\n    println!(\"hello\");\n}",
    ///   "options": {
    ///     "language": "Rust",
    ///     "theme": "dracula-pro",
    ///     "window_theme": "SharpEdges",
    ///     "scale_factor": 3
    ///   }
    /// }
    /// ```
    #[oai(path = "/render", method = "post", tag = "ApiRenderTags::Render")]
    async fn render(
        &self,
        Json(json): Json<RenderRequest>,
        state: Data<&Arc<AppState>>,
    ) -> RenderResponse {
        let options = match json.options.map(|o| o.into_render_options()) {
            None => RenderOptions::default(),
            Some(Ok(options)) => options,
            Some(Err(e)) => {
                return RenderResponse::BadRequest(Json(BadRequestResponse {
                    message: e.to_string(),
                }));
            }
        };

        tracing::info!(
            "Rendering: language={}, theme={}, scale={}",
            options.language().name(),
            options.theme(),
            options.scale_factor()
        );

        let result = render_in_background(state.renderer.clone(), json.code, options).await;

        let image = match result {
            Ok(image) => image,
            Err(e @ Error::ElementNotFound { .. }) => {
                tracing::error!("Render error: {}", e);
                return RenderResponse::BadGateway(Json(BadGatewayResponse {
                    detail: e.to_string(),
                }));
            }
            Err(e) => {
                tracing::error!("Render error: {}", e);
                return RenderResponse::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.render",
                        "render",
                        "Rendering failed",
                        &e.to_string(),
                    ),
                ));
            }
        };

        if json.return_base64.unwrap_or(false) {
            RenderResponse::Base64(Json(Base64Response {
                data: general_purpose::STANDARD.encode(&image),
                mime_type: "image/png".to_string(),
            }))
        } else {
            RenderResponse::Png(Attachment::new(image))
        }
    }

    /// List Supported Languages
    ///
    /// Get every language Carbon can highlight, with its Carbon mode
    #[oai(path = "/languages", method = "get", tag = "ApiRenderTags::Render")]
    async fn list_languages(&self) -> Json<Vec<LanguageEntry>> {
        let languages = Language::ALL
            .iter()
            .map(|language| LanguageEntry {
                name: language.name().to_string(),
                mode: language.mode().to_string(),
            })
            .collect();

        Json(languages)
    }

    #[oai(path = "/health", method = "get")]
    async fn health(&self) -> Json<serde_json::Value> {
        Json(serde_json::json!({ "status": "healthy" }))
    }
}

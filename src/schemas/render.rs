use poem_openapi::{
    ApiResponse, Object,
    payload::{Attachment, Json},
};
use serde::{Deserialize, Serialize};

use super::common::{BadGatewayResponse, BadRequestResponse, InternalServerErrorResponse};
use crate::core::language::{Language, ParseEnumError, WindowTheme};
use crate::core::options::RenderOptions;

/// Render options; every field is optional and falls back to Carbon's default.
#[derive(Object, Deserialize, Clone, Debug, Default)]
pub struct OptionsPayload {
    /// RGBA or hex color, e.g. "rgba(171, 184, 195, 1)"
    pub background_color: Option<String>,
    pub drop_shadow: Option<bool>,
    /// px value, e.g. "68px"
    pub drop_shadow_blur_radius: Option<String>,
    /// px value, e.g. "20px"
    pub drop_shadow_offset_y: Option<String>,
    pub first_line_number: Option<i32>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    /// Language name (e.g. "Rust") or Carbon mode (e.g. "text/x-java")
    pub language: Option<String>,
    /// Percentage, e.g. "133%"
    pub line_height: Option<String>,
    pub line_numbers: Option<bool>,
    pub padding_horizontal: Option<String>,
    pub padding_vertical: Option<String>,
    /// Device pixel ratio of the captured page
    pub scale_factor: Option<i32>,
    pub theme: Option<String>,
    pub watermark: Option<bool>,
    pub width_adjustment: Option<bool>,
    pub window_controls: Option<bool>,
    /// "RoundedEdges", "SharpEdges", "Outlined" or Carbon's "none", "sharp", "bw"
    pub window_theme: Option<String>,
}

impl OptionsPayload {
    pub fn into_render_options(self) -> Result<RenderOptions, ParseEnumError> {
        let mut builder = RenderOptions::builder();

        if let Some(v) = self.background_color {
            builder = builder.background_color(v);
        }
        if let Some(v) = self.drop_shadow {
            builder = builder.drop_shadow(v);
        }
        if let Some(v) = self.drop_shadow_blur_radius {
            builder = builder.drop_shadow_blur_radius(v);
        }
        if let Some(v) = self.drop_shadow_offset_y {
            builder = builder.drop_shadow_offset_y(v);
        }
        if let Some(v) = self.first_line_number {
            builder = builder.first_line_number(v);
        }
        if let Some(v) = self.font_family {
            builder = builder.font_family(v);
        }
        if let Some(v) = self.font_size {
            builder = builder.font_size(v);
        }
        if let Some(v) = self.language {
            builder = builder.language(v.parse::<Language>()?);
        }
        if let Some(v) = self.line_height {
            builder = builder.line_height(v);
        }
        if let Some(v) = self.line_numbers {
            builder = builder.line_numbers(v);
        }
        if let Some(v) = self.padding_horizontal {
            builder = builder.padding_horizontal(v);
        }
        if let Some(v) = self.padding_vertical {
            builder = builder.padding_vertical(v);
        }
        if let Some(v) = self.scale_factor {
            builder = builder.scale_factor(v);
        }
        if let Some(v) = self.theme {
            builder = builder.theme(v);
        }
        if let Some(v) = self.watermark {
            builder = builder.watermark(v);
        }
        if let Some(v) = self.width_adjustment {
            builder = builder.width_adjustment(v);
        }
        if let Some(v) = self.window_controls {
            builder = builder.window_controls(v);
        }
        if let Some(v) = self.window_theme {
            builder = builder.window_theme(v.parse::<WindowTheme>()?);
        }

        Ok(builder.build())
    }
}

#[derive(Object, Deserialize, Clone)]
pub struct RenderRequest {
    /// Source code to render
    pub code: String,

    pub options: Option<OptionsPayload>,

    /// Return base64 encoded string instead of binary
    pub return_base64: Option<bool>,
}

#[derive(Object, Serialize)]
pub struct Base64Response {
    /// Base64 encoded image data
    pub data: String,

    /// MIME type of the image
    pub mime_type: String,
}

#[derive(Object, Serialize, Clone)]
pub struct LanguageEntry {
    pub name: String,
    /// Identifier Carbon uses for the language
    pub mode: String,
}

#[derive(ApiResponse)]
pub enum RenderResponse {
    #[oai(status = 200, content_type = "image/png")]
    Png(Attachment<Vec<u8>>),

    #[oai(status = 200, content_type = "application/json")]
    Base64(Json<Base64Response>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    /// Carbon did not produce the output container
    #[oai(status = 502)]
    BadGateway(Json<BadGatewayResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

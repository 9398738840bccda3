use crate::core::language::{Language, WindowTheme};

/// Options to render an image with.
///
/// Values are handed to Carbon verbatim; nothing is validated locally, so a
/// malformed color or size shows up as a visual defect in the image rather
/// than as an error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    background_color: String,
    drop_shadow: bool,
    drop_shadow_blur_radius: String,
    drop_shadow_offset_y: String,
    first_line_number: i32,
    font_family: String,
    font_size: String,
    language: Language,
    line_height: String,
    line_numbers: bool,
    padding_horizontal: String,
    padding_vertical: String,
    scale_factor: i32,
    theme: String,
    watermark: bool,
    width_adjustment: bool,
    window_controls: bool,
    window_theme: WindowTheme,
}

impl Default for RenderOptions {
    /// The defaults Carbon itself starts with.
    fn default() -> Self {
        Self {
            background_color: "rgba(171, 184, 195, 1)".to_string(),
            drop_shadow: true,
            drop_shadow_blur_radius: "68px".to_string(),
            drop_shadow_offset_y: "20px".to_string(),
            first_line_number: 1,
            font_family: "Hack".to_string(),
            font_size: "14px".to_string(),
            language: Language::Auto,
            line_height: "133%".to_string(),
            line_numbers: false,
            padding_horizontal: "56px".to_string(),
            padding_vertical: "56px".to_string(),
            scale_factor: 2,
            theme: "seti".to_string(),
            watermark: false,
            width_adjustment: true,
            window_controls: true,
            window_theme: WindowTheme::RoundedEdges,
        }
    }
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn drop_shadow(&self) -> bool {
        self.drop_shadow
    }

    pub fn drop_shadow_blur_radius(&self) -> &str {
        &self.drop_shadow_blur_radius
    }

    pub fn drop_shadow_offset_y(&self) -> &str {
        &self.drop_shadow_offset_y
    }

    pub fn first_line_number(&self) -> i32 {
        self.first_line_number
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn line_height(&self) -> &str {
        &self.line_height
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn padding_horizontal(&self) -> &str {
        &self.padding_horizontal
    }

    pub fn padding_vertical(&self) -> &str {
        &self.padding_vertical
    }

    /// Device pixel ratio of the page the image is captured from.
    pub fn scale_factor(&self) -> i32 {
        self.scale_factor
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn watermark(&self) -> bool {
        self.watermark
    }

    pub fn width_adjustment(&self) -> bool {
        self.width_adjustment
    }

    pub fn window_controls(&self) -> bool {
        self.window_controls
    }

    pub fn window_theme(&self) -> WindowTheme {
        self.window_theme
    }
}

/// Builds a [`RenderOptions`] fluently, starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    /// An RGBA or hex color, e.g. `#fff` or `rgba(0, 0, 0, 0)`.
    pub fn background_color(mut self, background_color: impl Into<String>) -> Self {
        self.options.background_color = background_color.into();
        self
    }

    pub fn drop_shadow(mut self, drop_shadow: bool) -> Self {
        self.options.drop_shadow = drop_shadow;
        self
    }

    /// A px value, e.g. `20px`.
    pub fn drop_shadow_blur_radius(mut self, radius: impl Into<String>) -> Self {
        self.options.drop_shadow_blur_radius = radius.into();
        self
    }

    /// A px value, e.g. `20px`.
    pub fn drop_shadow_offset_y(mut self, offset: impl Into<String>) -> Self {
        self.options.drop_shadow_offset_y = offset.into();
        self
    }

    /// Only has an effect when line numbers are enabled.
    pub fn first_line_number(mut self, first_line_number: i32) -> Self {
        self.options.first_line_number = first_line_number;
        self
    }

    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.options.font_family = font_family.into();
        self
    }

    pub fn font_size(mut self, font_size: impl Into<String>) -> Self {
        self.options.font_size = font_size.into();
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.options.language = language;
        self
    }

    /// A percentage, e.g. `200%`.
    pub fn line_height(mut self, line_height: impl Into<String>) -> Self {
        self.options.line_height = line_height.into();
        self
    }

    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.options.line_numbers = line_numbers;
        self
    }

    pub fn padding_horizontal(mut self, padding: impl Into<String>) -> Self {
        self.options.padding_horizontal = padding.into();
        self
    }

    pub fn padding_vertical(mut self, padding: impl Into<String>) -> Self {
        self.options.padding_vertical = padding.into();
        self
    }

    pub fn scale_factor(mut self, scale_factor: i32) -> Self {
        self.options.scale_factor = scale_factor;
        self
    }

    /// A Carbon theme identifier, e.g. `seti` or `dracula-pro`.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.options.theme = theme.into();
        self
    }

    pub fn watermark(mut self, watermark: bool) -> Self {
        self.options.watermark = watermark;
        self
    }

    pub fn width_adjustment(mut self, width_adjustment: bool) -> Self {
        self.options.width_adjustment = width_adjustment;
        self
    }

    pub fn window_controls(mut self, window_controls: bool) -> Self {
        self.options.window_controls = window_controls;
        self
    }

    pub fn window_theme(mut self, window_theme: WindowTheme) -> Self {
        self.options.window_theme = window_theme;
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

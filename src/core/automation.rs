//! The slice of browser automation the renderer relies on.
//!
//! A backend opens one isolated [`Session`] per render. Dropping the session
//! must release everything it acquired (tab, browser process), so cleanup
//! happens on every exit path including early `?` returns.

use anyhow::Result;

/// Rectangle in device-independent pixels, as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenshotParams {
    pub clip: BoundingBox,
    /// Clip coordinates are relative to the whole document, not the viewport.
    pub full_page: bool,
    /// Capture with a transparent page background.
    pub omit_background: bool,
}

pub trait Automation {
    type Session: Session;

    fn new_session(&self, device_scale_factor: i32) -> Result<Self::Session>;
}

pub trait Session {
    type Element<'a>: Element
    where
        Self: 'a;

    fn navigate(&self, url: &str) -> Result<()>;

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element<'_>>>;

    /// PNG bytes of the requested region.
    fn screenshot(&self, params: &ScreenshotParams) -> Result<Vec<u8>>;
}

pub trait Element {
    fn bounding_box(&self) -> Result<BoundingBox>;
}

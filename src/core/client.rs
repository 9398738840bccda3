use std::path::Path;
use std::sync::Arc;

use crate::core::automation::{Automation, Element, ScreenshotParams, Session};
use crate::core::error::{Error, Result};
use crate::core::options::RenderOptions;
use crate::core::query::carbon_url;

/// Carbon's output container. Screenshotting the element itself also paints
/// the page background around it, so only the box of this layer is clipped.
pub const IMAGE_SELECTOR: &str = "#export-container .container-bg";

/// Renders code into PNG images through Carbon.
#[derive(Clone)]
pub struct CarbonClient<A> {
    automation: A,
}

impl<A: Automation> CarbonClient<A> {
    pub fn new(automation: A) -> Self {
        Self { automation }
    }

    pub fn render(&self, code: &str) -> Result<Vec<u8>> {
        self.render_with_options(code, &RenderOptions::default())
    }

    pub fn render_with_options(&self, code: &str, options: &RenderOptions) -> Result<Vec<u8>> {
        let url = carbon_url(code, options);
        tracing::info!(
            "Rendering {} bytes of code (theme={}, language={})",
            code.len(),
            options.theme(),
            options.language().mode()
        );

        let session = self.automation.new_session(options.scale_factor())?;
        session.navigate(&url)?;
        tracing::debug!("Navigated to carbon ({} byte url)", url.len());

        let element = session
            .query_selector(IMAGE_SELECTOR)?
            .ok_or_else(|| Error::ElementNotFound {
                selector: IMAGE_SELECTOR.to_string(),
            })?;
        let clip = element.bounding_box()?;
        tracing::debug!("Output container at {:?}", clip);

        let image = session.screenshot(&ScreenshotParams {
            clip,
            full_page: true,
            omit_background: true,
        })?;

        tracing::info!("Render completed, size: {} bytes", image.len());
        Ok(image)
    }

    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        self.render_file_with_options(path, &RenderOptions::default())
    }

    /// Reads the file and renders its contents. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn render_file_with_options(
        &self,
        path: impl AsRef<Path>,
        options: &RenderOptions,
    ) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.render_with_options(&String::from_utf8_lossy(&bytes), options)
    }
}

/// Object-safe rendering entry point, for holders of a `dyn` renderer.
pub trait ImageRenderer: Send + Sync {
    fn render(&self, code: &str, options: &RenderOptions) -> Result<Vec<u8>>;
}

impl<A> ImageRenderer for CarbonClient<A>
where
    A: Automation + Send + Sync,
{
    fn render(&self, code: &str, options: &RenderOptions) -> Result<Vec<u8>> {
        self.render_with_options(code, options)
    }
}

/// Runs a render on tokio's blocking pool so async callers are not stalled
/// by the browser round trips.
pub async fn render_in_background(
    renderer: Arc<dyn ImageRenderer>,
    code: String,
    options: RenderOptions,
) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || renderer.render(&code, &options))
        .await
        .map_err(|e| Error::Task(e.to_string()))?
}

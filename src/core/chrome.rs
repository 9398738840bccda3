use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};
use headless_chrome::protocol::cdp::{DOM, Emulation, Page};
use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::util::Timeout;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::core::automation::{Automation, BoundingBox, Element, ScreenshotParams, Session};

#[derive(Debug, Clone)]
pub struct ChromeConfig {
    pub headless: bool,
    pub sandbox: bool,
    /// Chrome/Chromium binary; autodetected when `None`
    pub path: Option<PathBuf>,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub navigation_timeout: Duration,
    /// How long to wait for Carbon to put the output container on the page
    pub element_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            path: None,
            viewport_width: 1920,
            viewport_height: 1080,
            navigation_timeout: Duration::from_secs(30),
            element_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(60),
        }
    }
}

/// Automation backend driving a local Chrome over the DevTools protocol.
///
/// Every session launches its own browser process; nothing is pooled.
#[derive(Clone)]
pub struct HeadlessChrome {
    launch_options: LaunchOptions<'static>,
    config: ChromeConfig,
}

impl HeadlessChrome {
    pub fn new(config: ChromeConfig) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(config.sandbox)
            .path(config.path.clone())
            .window_size(Some((config.viewport_width, config.viewport_height)))
            .idle_browser_timeout(config.idle_timeout)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-extensions"),
                OsStr::new("--disable-sync"),
                OsStr::new("--mute-audio"),
                OsStr::new("--no-first-run"),
                OsStr::new("--disable-default-apps"),
                OsStr::new("--hide-scrollbars"),
            ])
            .build()
            .map_err(|_| anyhow!("Could not find Chrome/Chromium binary"))?;

        Ok(Self {
            launch_options,
            config,
        })
    }
}

impl Automation for HeadlessChrome {
    type Session = ChromeSession;

    fn new_session(&self, device_scale_factor: i32) -> Result<ChromeSession> {
        tracing::debug!("Launching browser (device scale factor {})", device_scale_factor);
        let browser = Browser::new(self.launch_options.clone())?;
        let tab = browser.new_tab()?;
        let session = ChromeSession {
            tab,
            element_timeout: self.config.element_timeout,
            _browser: browser,
        };

        session.tab.set_default_timeout(self.config.navigation_timeout);
        session
            .tab
            .call_method(Emulation::SetDeviceMetricsOverride {
                width: self.config.viewport_width,
                height: self.config.viewport_height,
                device_scale_factor: f64::from(device_scale_factor),
                mobile: false,
                scale: None,
                screen_width: None,
                screen_height: None,
                position_x: None,
                position_y: None,
                dont_set_visible_size: None,
                screen_orientation: None,
                viewport: None,
                display_feature: None,
                device_posture: None,
            })?;

        Ok(session)
    }
}

/// One tab in a browser process owned by this session alone.
///
/// Dropping it closes the tab, then the browser process goes down with the
/// `Browser` handle.
pub struct ChromeSession {
    tab: Arc<Tab>,
    element_timeout: Duration,
    _browser: Browser,
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            tracing::warn!("Failed to close tab during cleanup: {}", e);
        } else {
            tracing::debug!("Tab closed successfully");
        }
    }
}

impl Session for ChromeSession {
    type Element<'a> = ChromeElement<'a>;

    fn navigate(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    fn query_selector(&self, selector: &str) -> Result<Option<ChromeElement<'_>>> {
        // Carbon renders client side, so the container can appear after load.
        let found = no_match_as_none(
            self.tab
                .wait_for_element_with_custom_timeout(selector, self.element_timeout),
        )?;
        if found.is_none() {
            tracing::debug!("No element matched {}", selector);
        }
        Ok(found.map(|element| ChromeElement { element }))
    }

    fn screenshot(&self, params: &ScreenshotParams) -> Result<Vec<u8>> {
        if params.omit_background {
            self.tab
                .call_method(Emulation::SetDefaultBackgroundColorOverride {
                    color: Some(DOM::RGBA {
                        r: 0,
                        g: 0,
                        b: 0,
                        a: Some(0.0),
                    }),
                })?;
        }

        let captured = self.tab.call_method(capture_request(params))?;
        Ok(general_purpose::STANDARD.decode(captured.data)?)
    }
}

/// Waiting out the timeout or an empty query means the selector matched
/// nothing; any other failure belongs to the browser and is passed on.
fn no_match_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(found) => Ok(Some(found)),
        Err(e) if e.is::<Timeout>() || e.is::<NoElementFound>() => Ok(None),
        Err(e) => Err(e),
    }
}

fn capture_request(params: &ScreenshotParams) -> Page::CaptureScreenshot {
    Page::CaptureScreenshot {
        format: Some(Page::CaptureScreenshotFormatOption::Png),
        quality: None,
        clip: Some(Page::Viewport {
            x: params.clip.x,
            y: params.clip.y,
            width: params.clip.width,
            height: params.clip.height,
            scale: 1.0,
        }),
        from_surface: Some(true),
        capture_beyond_viewport: Some(params.full_page),
        optimize_for_speed: None,
    }
}

fn box_from_viewport(viewport: Page::Viewport) -> BoundingBox {
    BoundingBox {
        x: viewport.x,
        y: viewport.y,
        width: viewport.width,
        height: viewport.height,
    }
}

pub struct ChromeElement<'a> {
    element: headless_chrome::Element<'a>,
}

impl Element for ChromeElement<'_> {
    fn bounding_box(&self) -> Result<BoundingBox> {
        Ok(box_from_viewport(self.element.get_box_model()?.border_viewport()))
    }
}

pub mod automation;
pub mod chrome;
pub mod client;
pub mod error;
pub mod language;
pub mod options;
pub mod query;

pub use client::{CarbonClient, ImageRenderer, render_in_background};
pub use error::{Error, Result};
pub use language::{Language, WindowTheme};
pub use options::{RenderOptions, RenderOptionsBuilder};

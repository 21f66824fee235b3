//! Image asset preparation for the mobile app build pipeline.

pub mod adaptive_icon;
pub mod compose;
pub mod error;
pub mod logo;

pub use error::{AssetError, Result};

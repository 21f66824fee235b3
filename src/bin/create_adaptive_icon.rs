//! Create the Android adaptive icon from the original logo.
//!
//! Launchers only guarantee the central safe zone of an adaptive icon, so
//! the logo is scaled down and padded rather than filling the whole canvas.

use std::path::Path;

use asset_prep::adaptive_icon::create_adaptive_icon;
use asset_prep::Result;

const INPUT_PATH: &str = "assets/images/logo.png";
const OUTPUT_PATH: &str = "assets/images/adaptive-icon.png";

fn main() -> Result<()> {
    env_logger::init(); // Initialize logger

    create_adaptive_icon(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))
}

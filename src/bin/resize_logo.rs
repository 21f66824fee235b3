//! Normalize the logo to an exact 1024x1024 square on a white background.

use std::path::Path;

use asset_prep::logo::resize_logo;
use asset_prep::Result;

const INPUT_PATH: &str = "assets/images/logo-source.jpg";
const OUTPUT_PATH: &str = "assets/images/logo-1024.jpg";

fn main() -> Result<()> {
    env_logger::init();

    resize_logo(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH), 1024)
}

use std::path::Path;

use anyhow::Context;
use image::GrayImage;
use libgame::Session;

use crate::{cli::Seed, config::ClientConfig};

pub fn build_session(seed: &Seed, config: &ClientConfig) -> anyhow::Result<Session> {
    match seed {
        Seed::Dimensions { width, height } => {
            Session::new(*width, *height).context("Couldn't create board")
        }
        Seed::Image(path) => session_from_image(path, config.alive_threshold),
    }
}

fn session_from_image(path: &Path, alive_threshold: u8) -> anyhow::Result<Session> {
    let image = image::open(path)
        .with_context(|| format!("Couldn't load image {}", path.display()))?
        .to_luma8();

    session_from_luma(&image, alive_threshold)
}

fn session_from_luma(image: &GrayImage, alive_threshold: u8) -> anyhow::Result<Session> {
    let (width, height) = image.dimensions();
    let cells = image.pixels().map(|pixel| pixel.0[0] >= alive_threshold);

    Session::from_bitmap(width as usize, height as usize, cells)
        .context("Couldn't seed board from image")
}

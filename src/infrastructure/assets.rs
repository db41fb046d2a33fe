//! Static image assets
//!
//! The terminal cannot show the pictures themselves, so "loading" an image
//! means: the file is readable and its header is a known image format.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use color_eyre::eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Bytes read from the head of a candidate file
const HEADER_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ImageFormat {
    #[strum(to_string = "PNG")]
    Png,
    #[strum(to_string = "JPEG")]
    Jpeg,
    #[strum(to_string = "GIF")]
    Gif,
    #[strum(to_string = "WebP")]
    Webp,
    #[strum(to_string = "SVG")]
    Svg,
}

/// Detect an image format from the first bytes of a file
pub fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some(ImageFormat::Png);
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some(ImageFormat::Jpeg);
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some(ImageFormat::Gif);
    }
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return Some(ImageFormat::Webp);
    }

    let text = String::from_utf8_lossy(data);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    if (text.starts_with("<svg") || text.starts_with("<?xml")) && text.contains("<svg") {
        return Some(ImageFormat::Svg);
    }

    None
}

/// Probe one candidate path
pub fn probe_image(path: &Path) -> Result<ImageFormat> {
    let mut file =
        File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    match detect_format(&header) {
        Some(format) => Ok(format),
        None => bail!("{} is not a recognized image", path.display()),
    }
}

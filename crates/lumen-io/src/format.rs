//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header, and
//! picks output formats from file extensions.

use crate::{IoError, IoResult};
use image::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// Radiance RGBE: "#?RADIANCE" or "#?RGBE"
    pub const RADIANCE: &[u8] = b"#?RADIANCE";
    pub const RGBE: &[u8] = b"#?RGBE";

    /// OpenEXR: 76 2F 31 01
    pub const EXR: &[u8] = &[0x76, 0x2F, 0x31, 0x01];

    /// Binary PNM formats
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }
    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }
    if data.starts_with(magic::RADIANCE) || data.starts_with(magic::RGBE) {
        return Ok(ImageFormat::Hdr);
    }
    if data.starts_with(magic::EXR) {
        return Ok(ImageFormat::OpenExr);
    }
    if data.starts_with(magic::PGM_BINARY) || data.starts_with(magic::PPM_BINARY) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

/// Output format for `path`, chosen by its extension.
pub fn format_from_path<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let path = path.as_ref();
    ImageFormat::from_path(path).map_err(|_| {
        IoError::UnsupportedFormat(format!("no image format for {}", path.display()))
    })
}

/// Whether `format` stores floating-point radiance.
pub fn is_hdr_format(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Hdr | ImageFormat::OpenExr)
}

//! Inline image encoding for `data:` URIs.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use thiserror::Error;

/// JPEG quality used when re-encoding photos.
const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode a bitmap as base64 JPEG text.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn image_to_base64(img: &DynamicImage) -> Result<String, EncodeError> {
    let rgb = img.to_rgb8();
    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(buf.into_inner()))
}

/// Encode a bitmap as a complete `data:image/jpeg;base64,...` URI.
pub fn image_to_data_uri(img: &DynamicImage) -> Result<String, EncodeError> {
    Ok(data_uri("image/jpeg", &image_to_base64(img)?))
}

/// Embed raw file bytes as a data URI, with the MIME type guessed from the
/// file extension.
pub fn bytes_to_data_uri(path: &Path, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    data_uri(
        mime.essence_str(),
        &base64::engine::general_purpose::STANDARD.encode(bytes),
    )
}

fn data_uri(mime: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime, base64_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    fn decode(b64: &str) -> DynamicImage {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(37, 21, Rgb([10, 150, 136])));
        let encoded = image_to_base64(&img).unwrap();
        let decoded = decode(&encoded);
        assert_eq!(decoded.dimensions(), (37, 21));
    }

    #[test]
    fn test_alpha_images_are_flattened() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 12, Rgba([0, 0, 0, 128])));
        let encoded = image_to_base64(&img).unwrap();
        let decoded = decode(&encoded);
        assert_eq!(decoded.dimensions(), (8, 12));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_deterministic() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])));
        assert_eq!(
            image_to_base64(&img).unwrap(),
            image_to_base64(&img).unwrap()
        );
    }

    #[test]
    fn test_data_uri_prefix() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        assert!(image_to_data_uri(&img)
            .unwrap()
            .starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_bytes_to_data_uri_uses_extension() {
        let uri = bytes_to_data_uri(Path::new("images/app.png"), b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");

        let uri = bytes_to_data_uri(Path::new("images/app.jpeg"), b"abc");
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}

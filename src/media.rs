use image::GenericImageView;
use thiserror::Error;

use crate::model::{EmbeddedImage, ImageFormat};

/// Why a caller-supplied image could not be embedded.
#[derive(Debug, Error)]
pub(crate) enum MediaError {
    #[error("unsupported image format {0}")]
    UnsupportedFormat(String),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    Empty,
}

fn sniff_format(data: &[u8]) -> Result<(ImageFormat, image::ImageFormat), MediaError> {
    let detected = image::guess_format(data)?;
    let format = match detected {
        image::ImageFormat::Png => ImageFormat::Png,
        image::ImageFormat::Jpeg => ImageFormat::Jpeg,
        image::ImageFormat::Gif => ImageFormat::Gif,
        image::ImageFormat::Bmp => ImageFormat::Bmp,
        other => return Err(MediaError::UnsupportedFormat(format!("{other:?}"))),
    };
    Ok((format, detected))
}

/// Fully decodes `data` so that truncated or corrupt payloads are caught here
/// rather than by the word processor, then sizes it to `display_width` points
/// keeping the aspect ratio. The original bytes are embedded unchanged.
pub(crate) fn embed(data: &[u8], display_width: f32) -> Result<EmbeddedImage, MediaError> {
    let (format, detected) = sniff_format(data)?;
    let decoded = image::load_from_memory_with_format(data, detected)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(MediaError::Empty);
    }
    let display_height = display_width * height as f32 / width as f32;
    Ok(EmbeddedImage {
        data: data.to_vec(),
        format,
        display_width,
        display_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::new(width, height);
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn keeps_aspect_ratio() {
        let img = embed(&png(40, 20), 216.0).unwrap();
        assert_eq!(img.format, ImageFormat::Png);
        assert_eq!(img.display_width, 216.0);
        assert_eq!(img.display_height, 108.0);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = embed(b"definitely not an image", 216.0).unwrap_err();
        assert!(matches!(err, MediaError::Decode(_)));
    }

    #[test]
    fn truncated_png_keeps_the_decoder_error() {
        let data = png(16, 16);
        let err = embed(&data[..data.len() / 2], 216.0).unwrap_err();
        assert!(matches!(err, MediaError::Decode(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("image decode failed: "));
    }
}

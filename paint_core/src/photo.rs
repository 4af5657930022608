//! # Photo Edge Preview
//!
//! Optional edge-detection preview over an uploaded room photo. The preview
//! is purely illustrative: no dimensions are inferred from the image and the
//! calculator never reads it.
//!
//! The pipeline is decode -> grayscale -> Canny edge detection. The edge map
//! is a binary raster of the same spatial dimensions as the input, with edge
//! pixels at full intensity.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paint_core::photo::{annotate_photo, EdgeParams};
//!
//! let bytes = std::fs::read("room.jpg").unwrap();
//! let preview = annotate_photo(&bytes, &EdgeParams::default()).unwrap();
//! preview.edges.save("room_edges.png").unwrap();
//! ```

use image::{GrayImage, Luma, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, EstimateError};

/// Canny edge detector thresholds.
///
/// Gradient magnitudes above `high_threshold` are definite edges; magnitudes
/// between the two thresholds count only when connected to a definite edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeParams {
    /// Low hysteresis threshold
    pub low_threshold: f32,

    /// High hysteresis threshold
    pub high_threshold: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
        }
    }
}

/// Result of running the edge preview over a photo.
///
/// Holds every stage a front end might want to display: the decoded
/// original, the grayscale conversion, and the binary edge map.
///
/// Does not derive serde traits because `image` buffers do not implement
/// them; the preview is display-only and never crosses a wire.
#[derive(Debug, Clone)]
pub struct EdgePreview {
    /// Decoded original photo
    pub original: RgbaImage,

    /// Grayscale conversion fed to the edge detector
    pub grayscale: GrayImage,

    /// Binary edge map (edges at 255, background at 0)
    pub edges: GrayImage,
}

impl EdgePreview {
    /// Spatial dimensions shared by all three rasters.
    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }

    /// Edge map expanded to RGBA for display alongside the original.
    pub fn edges_rgba(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.edges.width(), self.edges.height());
        for (x, y, pixel) in self.edges.enumerate_pixels() {
            let Luma([v]) = *pixel;
            out.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
        out
    }
}

/// Detect edges in a grayscale raster.
///
/// Delegates to the Canny detector; output has identical dimensions to the
/// input, with edge pixels at 255.
pub fn detect_edges(grayscale: &GrayImage, params: &EdgeParams) -> GrayImage {
    imageproc::edges::canny(grayscale, params.low_threshold, params.high_threshold)
}

/// Decode an uploaded photo and run the edge preview.
///
/// Accepts any format the `image` crate can sniff from the byte stream
/// (JPEG and PNG in practice). Empty or undecodable input surfaces as a
/// structured error, never a panic.
pub fn annotate_photo(bytes: &[u8], params: &EdgeParams) -> CalcResult<EdgePreview> {
    if bytes.is_empty() {
        return Err(EstimateError::image_error("uploaded photo is empty"));
    }

    let decoded = image::load_from_memory(bytes)?;
    let original = decoded.to_rgba8();
    let grayscale = decoded.to_luma8();
    let edges = detect_edges(&grayscale, params);

    Ok(EdgePreview {
        original,
        grayscale,
        edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a flat-gray RGBA test image as PNG bytes.
    fn flat_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([128, 128, 128, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_default_thresholds() {
        let params = EdgeParams::default();
        assert_eq!(params.low_threshold, 50.0);
        assert_eq!(params.high_threshold, 150.0);
    }

    #[test]
    fn test_preview_preserves_dimensions() {
        let bytes = flat_png(16, 9);
        let preview = annotate_photo(&bytes, &EdgeParams::default()).unwrap();
        assert_eq!(preview.dimensions(), (16, 9));
        assert_eq!(preview.grayscale.dimensions(), (16, 9));
        assert_eq!(preview.edges.dimensions(), (16, 9));
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let bytes = flat_png(16, 16);
        let preview = annotate_photo(&bytes, &EdgeParams::default()).unwrap();
        assert!(preview.edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_edge_map_is_binary() {
        // Left half black, right half white: a strong vertical edge.
        let img = RgbaImage::from_fn(32, 32, |x, _| {
            if x < 16 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let preview = annotate_photo(&bytes, &EdgeParams::default()).unwrap();
        assert!(preview.edges.pixels().any(|p| p.0[0] == 255));
        assert!(preview.edges.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_edges_rgba_matches_edge_map() {
        let bytes = flat_png(8, 8);
        let preview = annotate_photo(&bytes, &EdgeParams::default()).unwrap();
        let rgba = preview.edges_rgba();
        assert_eq!(rgba.dimensions(), preview.edges.dimensions());
        assert!(rgba.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = annotate_photo(&[], &EdgeParams::default()).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_ERROR");
    }

    #[test]
    fn test_undecodable_input_rejected() {
        let err = annotate_photo(b"not an image", &EdgeParams::default()).unwrap_err();
        assert_eq!(err.error_code(), "IMAGE_ERROR");
    }
}

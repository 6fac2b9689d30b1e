//! Decoding of the selected event image into a displayable thumbnail.

use client_core::decode_data_url;

const PREVIEW_MAX_WIDTH: u32 = 600;
const PREVIEW_MAX_HEIGHT: u32 = 400;

#[derive(Clone)]
pub struct PreviewImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    // `thumbnail` also scales up, so small images are passed through untouched.
    let oversized = dynamic.width() > PREVIEW_MAX_WIDTH || dynamic.height() > PREVIEW_MAX_HEIGHT;
    let resized = if oversized {
        dynamic.thumbnail(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT)
    } else {
        dynamic
    }
    .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PreviewImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

/// The preview travels as a data url; this turns it back into pixels.
pub fn decode_preview_data_url(data_url: &str) -> Result<PreviewImage, String> {
    let (_, bytes) = decode_data_url(data_url).map_err(|err| err.to_string())?;
    decode_preview_image(&bytes)
}

/// Display size that fits `max` while keeping the aspect ratio.
pub fn fit_within(width: usize, height: usize, max: egui::Vec2) -> egui::Vec2 {
    if width == 0 || height == 0 {
        return egui::Vec2::ZERO;
    }
    let (w, h) = (width as f32, height as f32);
    let scale = (max.x / w).min(max.y / h).min(1.0);
    egui::vec2(w * scale, h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::encode_data_url;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(image)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_png_data_url_into_thumbnail() {
        let url = encode_data_url("image/png", &png_bytes(1200, 400));
        let preview = decode_preview_data_url(&url).expect("decode");
        assert_eq!((preview.width, preview.height), (600, 200));
        assert_eq!(preview.rgba.len(), 600 * 200 * 4);
    }

    #[test]
    fn small_images_keep_their_size() {
        let preview = decode_preview_image(&png_bytes(32, 16)).expect("decode");
        assert_eq!((preview.width, preview.height), (32, 16));
    }

    #[test]
    fn tall_images_shrink_to_the_height_bound() {
        let preview = decode_preview_image(&png_bytes(100, 800)).expect("decode");
        assert_eq!((preview.width, preview.height), (50, 400));
    }

    #[test]
    fn non_image_bytes_fail_to_decode() {
        let url = encode_data_url("text/plain", b"agenda.txt contents");
        assert!(decode_preview_data_url(&url).is_err());
    }

    #[test]
    fn fits_preview_into_box() {
        let size = fit_within(600, 200, egui::vec2(300.0, 200.0));
        assert_eq!(size, egui::vec2(300.0, 100.0));
        assert_eq!(fit_within(0, 10, egui::vec2(300.0, 200.0)), egui::Vec2::ZERO);
    }
}

//! PNG 인코더.
//!
//! 원시 프레임 → PNG 페이로드. 크기 제한이 있으면 base64 길이가 제한 안에
//! 들어올 때까지 가로/세로를 절반씩 줄여 다시 인코딩한다.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use tracing::debug;
use visiontest_core::error::CoreError;
use visiontest_core::models::frame::{PixelFormat, RawFrame};
use visiontest_core::models::image::{base64_len, ImagePayload};

/// 원시 프레임 → `DynamicImage`
pub fn frame_to_image(frame: &RawFrame) -> Result<DynamicImage, CoreError> {
    let (w, h) = (frame.width(), frame.height());
    let data = frame.data().to_vec();

    let image = match frame.format() {
        PixelFormat::Rgb24 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        PixelFormat::Rgba32 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        PixelFormat::Gray8 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
    };

    image.ok_or_else(|| CoreError::Image(format!("프레임 버퍼 변환 실패: {w}x{h}")))
}

/// 이미지 → PNG 바이트
fn encode_image_png(image: &DynamicImage) -> Result<Vec<u8>, CoreError> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| CoreError::Image(format!("PNG 인코딩 실패: {e}")))?;
    Ok(buf)
}

/// 원시 프레임을 원본 크기 그대로 PNG 인코딩
pub fn encode_png(frame: &RawFrame) -> Result<ImagePayload, CoreError> {
    let image = frame_to_image(frame)?;
    let bytes = encode_image_png(&image)?;
    debug!(
        "PNG 인코딩: {}x{} → {} bytes",
        frame.width(),
        frame.height(),
        bytes.len()
    );
    Ok(ImagePayload::png(bytes))
}

/// base64 길이가 `max_encoded_len` 이하가 될 때까지 축소하며 PNG 인코딩
///
/// 짧은 변이 `min_edge_px` 미만으로 내려가야 한다면 `CoreError::Validation`.
pub fn encode_png_within(
    frame: &RawFrame,
    max_encoded_len: usize,
    min_edge_px: u32,
) -> Result<ImagePayload, CoreError> {
    let mut image = frame_to_image(frame)?;

    loop {
        let bytes = encode_image_png(&image)?;
        let encoded_len = base64_len(bytes.len());

        if encoded_len <= max_encoded_len {
            debug!(
                width = image.width(),
                height = image.height(),
                encoded_len,
                "PNG 인코딩 (크기 제한 충족)"
            );
            return Ok(ImagePayload::png(bytes));
        }

        let (w, h) = (image.width() / 2, image.height() / 2);
        if w.min(h) < min_edge_px {
            return Err(CoreError::Validation {
                field: "frame".to_string(),
                message: format!(
                    "{}x{}까지 축소해도 base64 {}자 > 제한 {}자",
                    image.width(),
                    image.height(),
                    encoded_len,
                    max_encoded_len
                ),
            });
        }

        debug!(encoded_len, limit = max_encoded_len, "크기 초과 — {w}x{h}로 축소");
        image = image.resize_exact(w, h, FilterType::Triangle);
    }
}

/// 인코딩된 이미지 파일 → `Rgb24` 원시 프레임
pub fn decode_to_frame(bytes: &[u8]) -> Result<RawFrame, CoreError> {
    let rgb = image::load_from_memory(bytes)
        .map_err(|e| CoreError::Image(format!("이미지 디코딩 실패: {e}")))?
        .to_rgb8();
    let (w, h) = rgb.dimensions();
    RawFrame::new(rgb.into_raw(), w, h, PixelFormat::Rgb24)
}

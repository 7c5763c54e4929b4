//! 원시 카메라 프레임 모델.
//!
//! 캡처 서브시스템이 변환을 마친 바이트 버퍼 + 픽셀 크기 + 픽셀 형식.
//! 이 크레이트는 캡처 로직을 갖지 않으며 완성된 버퍼만 소비한다.

use chrono::{DateTime, Utc};

use crate::error::CoreError;

/// 픽셀 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8비트 RGB (3 bytes/pixel)
    Rgb24,
    /// 8비트 RGBA (4 bytes/pixel)
    Rgba32,
    /// 8비트 그레이스케일 (1 byte/pixel)
    Gray8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Rgba32 => 4,
            Self::Gray8 => 1,
        }
    }
}

/// 변환 완료된 원시 프레임
#[derive(Clone)]
pub struct RawFrame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
    captured_at: DateTime<Utc>,
}

impl RawFrame {
    /// 새 프레임 생성
    ///
    /// 버퍼 길이가 `width * height * bytes_per_pixel`과 다르면 거부한다.
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::Validation {
                field: "dimensions".to_string(),
                message: format!("빈 프레임: {width}x{height}"),
            });
        }

        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(CoreError::Validation {
                field: "data".to_string(),
                message: format!(
                    "버퍼 크기 불일치: {}x{} {:?} → {} bytes 필요, {} bytes 수신",
                    width,
                    height,
                    format,
                    expected,
                    data.len()
                ),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            format,
            captured_at: Utc::now(),
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

impl std::fmt::Debug for RawFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("captured_at", &self.captured_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_matching_buffer() {
        let frame = RawFrame::new(vec![0; 4 * 2 * 3], 4, 2, PixelFormat::Rgb24).unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data().len(), 24);
    }

    #[test]
    fn rejects_size_mismatch() {
        let result = RawFrame::new(vec![0; 10], 4, 2, PixelFormat::Rgba32);
        assert_matches!(result, Err(CoreError::Validation { ref field, .. }) if field == "data");
    }

    #[test]
    fn rejects_zero_dimensions() {
        let result = RawFrame::new(Vec::new(), 0, 10, PixelFormat::Gray8);
        assert_matches!(result, Err(CoreError::Validation { .. }));
    }
}

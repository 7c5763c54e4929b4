//! `images:annotate` 요청 본문.
//!
//! `{"requests":[{"image":{"content":<base64>},"features":[{"type":..,"maxResults":..}]}]}`

use serde::Serialize;

use visiontest_core::error::ApiError;
use visiontest_core::models::feature::Feature;
use visiontest_core::models::image::ImagePayload;

/// 배치 요청 (이 클라이언트는 항상 이미지 1장)
#[derive(Debug, Serialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

/// 이미지 1장 요청
#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: WireImage,
    pub features: Vec<Feature>,
}

/// 인라인 이미지 (base64)
#[derive(Debug, Serialize)]
pub struct WireImage {
    pub content: String,
}

impl BatchAnnotateImagesRequest {
    /// 이미지 1장 + 기능 1개 요청 생성
    pub fn single(image: &ImagePayload, feature: Feature) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: WireImage {
                    content: image.to_base64(),
                },
                features: vec![feature],
            }],
        }
    }

    /// JSON 본문 바이트로 직렬화
    pub fn to_body(&self) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(self)
            .map_err(|e| ApiError::InvalidRequest(format!("요청 직렬화 실패: {e}")))
    }
}

//! 이미지 어노테이션 포트.
//!
//! 구현: `visiontest-network` crate (`GoogleVisionClient`)

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::annotation::AnnotationList;
use crate::models::feature::Feature;
use crate::models::image::ImagePayload;

/// 이미지 어노테이터: 이미지 1장 + 기능 선택 → 어노테이션 목록
#[async_trait]
pub trait ImageAnnotator: Send + Sync {
    /// 이미지 1장에 대해 감지 요청 1회 수행
    ///
    /// 호출당 외부 요청은 정확히 1회. 재시도/캐시 없음.
    /// future를 drop하면 진행 중인 요청도 중단된다.
    async fn annotate(
        &self,
        image: &ImagePayload,
        feature: Feature,
    ) -> Result<AnnotationList, ApiError>;

    /// 제공자 이름 (예: "google-vision")
    fn provider_name(&self) -> &str;
}

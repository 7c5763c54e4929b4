//! `images:annotate` 응답 스키마와 디코딩.
//!
//! 응답 본문은 항상 타입이 지정된 스키마로 역직렬화한다. 필드 순서나
//! 중첩이 바뀌어도 결과가 달라지지 않는다. 제공자는 값이 0인 좌표를
//! 생략하므로 꼭짓점 필드는 모두 기본값 0을 갖는다.

use serde::Deserialize;

use visiontest_core::error::ApiError;
use visiontest_core::models::annotation::{
    Annotation, AnnotationList, BoundingPoly, NormalizedVertex, Vertex,
};
use visiontest_core::models::feature::FeatureType;

/// 에러 메시지 미리보기 최대 길이
const ERROR_PREVIEW_CHARS: usize = 200;

/// 배치 응답
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
    /// 배치 전체 에러 (일부 프록시/게이트웨이가 200과 함께 반환)
    pub error: Option<Status>,
}

/// 이미지 1장 응답
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub text_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    pub full_text_annotation: Option<FullTextAnnotation>,
    /// 이미지 단위 에러: 있으면 나머지 필드는 무시
    pub error: Option<Status>,
}

/// 라벨/텍스트 감지 결과
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
    pub locale: Option<String>,
    pub score: Option<f32>,
    pub mid: Option<String>,
    pub bounding_poly: Option<WireBoundingPoly>,
}

/// 객체 위치 감지 결과
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedObjectAnnotation {
    #[serde(default)]
    pub name: String,
    pub mid: Option<String>,
    pub language_code: Option<String>,
    pub score: Option<f32>,
    pub bounding_poly: Option<WireBoundingPoly>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBoundingPoly {
    #[serde(default)]
    pub vertices: Vec<WireVertex>,
    #[serde(default)]
    pub normalized_vertices: Vec<WireNormalizedVertex>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireVertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireNormalizedVertex {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct FullTextAnnotation {
    #[serde(default)]
    pub text: String,
}

/// google.rpc.Status
#[derive(Debug, Default, Deserialize)]
pub struct Status {
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
}

/// 2xx 이외 응답의 에러 래퍼: `{"error": {"code", "message", "status"}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Status,
}

impl From<WireBoundingPoly> for BoundingPoly {
    fn from(wire: WireBoundingPoly) -> Self {
        Self {
            vertices: wire
                .vertices
                .into_iter()
                .map(|v| Vertex::new(v.x, v.y))
                .collect(),
            normalized_vertices: wire
                .normalized_vertices
                .into_iter()
                .map(|v| NormalizedVertex { x: v.x, y: v.y })
                .collect(),
        }
    }
}

impl From<EntityAnnotation> for Annotation {
    fn from(wire: EntityAnnotation) -> Self {
        Self {
            description: wire.description,
            locale: wire.locale,
            score: wire.score,
            mid: wire.mid,
            bounding_poly: wire.bounding_poly.map(BoundingPoly::from),
        }
    }
}

impl From<LocalizedObjectAnnotation> for Annotation {
    fn from(wire: LocalizedObjectAnnotation) -> Self {
        Self {
            description: wire.name,
            locale: wire.language_code,
            score: wire.score,
            mid: wire.mid,
            bounding_poly: wire.bounding_poly.map(BoundingPoly::from),
        }
    }
}

impl AnnotateImageResponse {
    /// 요청한 기능에 해당하는 어노테이션만 추출
    pub fn into_annotations(self, feature: FeatureType) -> Result<AnnotationList, ApiError> {
        if let Some(status) = self.error {
            return Err(ApiError::Provider {
                code: status.code,
                message: status.message,
            });
        }

        let list = match feature {
            FeatureType::LabelDetection => AnnotationList::new(
                self.label_annotations
                    .into_iter()
                    .map(Annotation::from)
                    .collect(),
            ),
            FeatureType::TextDetection => AnnotationList::new(
                self.text_annotations
                    .into_iter()
                    .map(Annotation::from)
                    .collect(),
            )
            .with_full_text(self.full_text_annotation.map(|t| t.text)),
            FeatureType::ObjectLocalization => AnnotationList::new(
                self.localized_object_annotations
                    .into_iter()
                    .map(Annotation::from)
                    .collect(),
            ),
        };

        Ok(list)
    }
}

/// 2xx 응답 본문 디코딩
///
/// - 빈 본문, 잘린 JSON, `responses` 항목 없음 → `ApiError::Decode`
/// - 제공자 `error` 필드 → `ApiError::Provider` (메시지 원문 유지)
/// - 어노테이션 없음 → 빈 `AnnotationList`
pub fn decode_annotations(body: &str, feature: FeatureType) -> Result<AnnotationList, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::Decode("빈 응답 본문".to_string()));
    }

    let batch: BatchAnnotateImagesResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Decode(format!("응답 JSON 파싱 실패: {e}")))?;

    if let Some(status) = batch.error {
        return Err(ApiError::Provider {
            code: status.code,
            message: status.message,
        });
    }

    let first = batch
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Decode("응답 항목 없음 (responses가 비어 있음)".to_string()))?;

    first.into_annotations(feature)
}

/// 2xx 이외 응답 본문에서 에러 메시지 추출
///
/// 제공자 에러 래퍼가 있으면 그 메시지를, 없으면 본문 앞부분을 반환한다.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.chars().take(ERROR_PREVIEW_CHARS).collect(),
    }
}

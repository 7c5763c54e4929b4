//! 트리거 기반 캡처 세션.
//!
//! 사용자 트리거 1회 → 최신 프레임 PNG 인코딩 → 어노테이션 요청 1회 → 상태 텍스트.
//! 요청이 진행 중일 때 들어온 트리거는 대기열에 넣지 않고 거부한다.
//! 어떤 실패도 패닉 없이 [`SessionStatus`]로 돌려준다.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use visiontest_core::config::{AppConfig, CaptureConfig};
use visiontest_core::error::{ApiError, CoreError};
use visiontest_core::models::annotation::AnnotationList;
use visiontest_core::models::feature::{Feature, FeatureType};
use visiontest_core::ports::annotator::ImageAnnotator;
use visiontest_core::ports::frame_source::FrameSource;

use crate::encoder::encode_png_within;

/// 트리거 처리 결과
#[derive(Debug)]
pub enum SessionStatus {
    /// 이전 요청이 아직 진행 중
    Busy,
    /// 아직 수신한 프레임이 없음
    NoFrame,
    /// 프레임 인코딩 실패
    EncodeFailed(CoreError),
    /// API 호출 실패
    Failed(ApiError),
    /// 감지 완료
    Completed {
        feature: FeatureType,
        annotations: AnnotationList,
    },
}

impl SessionStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionStatus::Completed { .. })
    }
}

/// 화면 표시용 상태 텍스트
impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "요청 진행 중 — 완료 후 다시 시도하세요"),
            Self::NoFrame => write!(f, "아직 캡처된 프레임이 없습니다"),
            Self::EncodeFailed(e) => write!(f, "프레임 인코딩 실패: {e}"),
            Self::Failed(e) => write!(f, "오류: {e}"),
            Self::Completed {
                feature,
                annotations,
            } => {
                if annotations.is_empty() {
                    return write!(f, "감지 결과 없음");
                }
                // 텍스트 감지는 전체 텍스트가 있으면 그것만 보여준다
                if *feature == FeatureType::TextDetection {
                    if let Some(text) = annotations.full_text.as_deref() {
                        return f.write_str(text.trim_end());
                    }
                }
                f.write_str(&annotations.descriptions().join("\n"))
            }
        }
    }
}

/// 캡처 세션: 프레임 공급자와 어노테이터를 연결
pub struct CaptureSession {
    source: Arc<dyn FrameSource>,
    annotator: Arc<dyn ImageAnnotator>,
    feature: Feature,
    max_encoded_len: usize,
    min_edge_px: u32,
    /// 진행 중 요청 가드
    in_flight: Mutex<()>,
}

impl CaptureSession {
    pub fn new(
        source: Arc<dyn FrameSource>,
        annotator: Arc<dyn ImageAnnotator>,
        feature: Feature,
        max_encoded_len: usize,
        min_edge_px: u32,
    ) -> Self {
        Self {
            source,
            annotator,
            feature,
            max_encoded_len,
            min_edge_px,
            in_flight: Mutex::new(()),
        }
    }

    /// 설정에서 세션 생성 (기능 타입 + 최대 결과 수 + 크기 제한)
    pub fn from_config(
        config: &AppConfig,
        source: Arc<dyn FrameSource>,
        annotator: Arc<dyn ImageAnnotator>,
    ) -> Self {
        let CaptureConfig {
            feature,
            min_edge_px,
        } = config.capture.clone();

        Self::new(
            source,
            annotator,
            Feature::new(feature, config.vision_api.default_max_results),
            config.vision_api.max_encoded_len,
            min_edge_px,
        )
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// 요청 진행 중 여부
    pub fn is_busy(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    /// 트리거 1회 처리
    pub async fn trigger(&self) -> SessionStatus {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("요청 진행 중 — 트리거 거부");
            return SessionStatus::Busy;
        };

        let Some(frame) = self.source.latest_frame() else {
            return SessionStatus::NoFrame;
        };
        debug!(
            width = frame.width(),
            height = frame.height(),
            captured_at = %frame.captured_at(),
            "최신 프레임 인코딩"
        );

        let (max_len, min_edge) = (self.max_encoded_len, self.min_edge_px);
        let encoded =
            tokio::task::spawn_blocking(move || encode_png_within(&frame, max_len, min_edge))
                .await
                .map_err(|e| CoreError::Internal(format!("인코딩 작업 실패: {e}")))
                .and_then(|result| result);

        let payload = match encoded {
            Ok(payload) => payload,
            Err(e) => {
                warn!("프레임 인코딩 실패: {e}");
                return SessionStatus::EncodeFailed(e);
            }
        };

        debug!(
            provider = self.annotator.provider_name(),
            feature = %self.feature.feature_type,
            size = payload.len(),
            "프레임 어노테이션 요청"
        );

        match self.annotator.annotate(&payload, self.feature).await {
            Ok(annotations) => {
                info!(count = annotations.len(), "프레임 어노테이션 완료");
                SessionStatus::Completed {
                    feature: self.feature.feature_type,
                    annotations,
                }
            }
            Err(e) => {
                warn!("프레임 어노테이션 실패: {e}");
                SessionStatus::Failed(e)
            }
        }
    }
}

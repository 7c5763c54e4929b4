//! 애플리케이션 설정 구조체.
//!
//! Vision API 엔드포인트, 타임아웃, 페이로드 크기 제한, 캡처 세션 설정을 정의한다.
//! [`crate::config_manager::ConfigManager`]를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::models::feature::FeatureType;

/// Vision API 기본 엔드포인트
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// 제공자 문서상 요청 크기 제한 (base64 문자 수)
pub const DEFAULT_MAX_ENCODED_LEN: usize = 1_000_000;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vision API 연결 설정
    #[serde(default)]
    pub vision_api: VisionApiConfig,
    /// 캡처 세션 설정
    #[serde(default)]
    pub capture: CaptureConfig,
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self {
            vision_api: VisionApiConfig::default(),
            capture: CaptureConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// Vision API 설정
// ============================================================

/// Vision API 설정
///
/// API 키 자체는 설정 파일에 저장하지 않는다. `api_key_file` 경로 또는
/// `VISIONTEST_API_KEY` 환경 변수에서 읽는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionApiConfig {
    /// API URL (`?key=` 쿼리는 클라이언트가 붙인다)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API 키 파일 경로 (없으면 설정 디렉토리의 `gcp.apikey`)
    #[serde(default)]
    pub api_key_file: Option<PathBuf>,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// base64 페이로드 최대 길이 (문자 수)
    #[serde(default = "default_max_encoded_len")]
    pub max_encoded_len: usize,
    /// 기본 최대 결과 수
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,
}

impl VisionApiConfig {
    /// 요청 타임아웃
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for VisionApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key_file: None,
            timeout_secs: default_timeout_secs(),
            max_encoded_len: default_max_encoded_len(),
            default_max_results: default_max_results(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_VISION_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_encoded_len() -> usize {
    DEFAULT_MAX_ENCODED_LEN
}

fn default_max_results() -> u32 {
    10
}

// ============================================================
// 캡처 세션 설정
// ============================================================

/// 캡처 세션 설정: 트리거 시 요청할 기능과 축소 하한
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// 트리거 시 요청할 기능
    #[serde(default = "default_capture_feature")]
    pub feature: FeatureType,
    /// 크기 제한 맞춤 축소 시 최소 변 길이 (px)
    #[serde(default = "default_min_edge_px")]
    pub min_edge_px: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            feature: default_capture_feature(),
            min_edge_px: default_min_edge_px(),
        }
    }
}

fn default_capture_feature() -> FeatureType {
    FeatureType::TextDetection
}

fn default_min_edge_px() -> u32 {
    16
}

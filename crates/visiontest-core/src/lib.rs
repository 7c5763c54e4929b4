//! # visiontest-core
//!
//! Google Cloud Vision 데모 클라이언트의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 어노테이션, 기능 타입, 이미지 페이로드, 원시 프레임
//! - [`ports`]: Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체
//! - [`config_manager`]: 설정 파일 관리 (로드/저장)
//! - [`credentials`]: API 키 로드 (로그 노출 방지)

pub mod config;
pub mod config_manager;
pub mod credentials;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::feature::{Feature, FeatureType};

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.vision_api.timeout_secs, 30);
        assert_eq!(config.vision_api.max_encoded_len, 1_000_000);
        assert_eq!(config.vision_api.default_max_results, 10);
        assert_eq!(config.capture.feature, FeatureType::TextDetection);
        assert!(config.vision_api.api_key_file.is_none());
    }

    #[test]
    fn feature_wire_format() {
        let feature = Feature::new(FeatureType::ObjectLocalization, 5);
        let json = serde_json::to_value(feature).unwrap();
        assert_eq!(json["type"], "OBJECT_LOCALIZATION");
        assert_eq!(json["maxResults"], 5);
    }
}

//! # visiontest-network
//!
//! Google Cloud Vision `images:annotate` 어댑터.
//! `ImageAnnotator` 포트를 구현하며, HTTP 세션은 `HttpTransport` 포트 뒤에
//! 숨겨 테스트에서 가짜 전송 계층으로 교체할 수 있다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use visiontest_core::credentials::ApiKey;
//! use visiontest_core::models::feature::{Feature, FeatureType};
//! use visiontest_network::vision_client::GoogleVisionClient;
//!
//! let api_key = ApiKey::resolve(None, &default_key_path)?;
//! let client = GoogleVisionClient::new(&config.vision_api, api_key)?;
//! let labels = client
//!     .annotate(&payload, Feature::new(FeatureType::LabelDetection, 10))
//!     .await?;
//! ```

pub mod request;
pub mod response;
pub mod transport;
pub mod vision_client;

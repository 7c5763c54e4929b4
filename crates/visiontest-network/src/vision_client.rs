//! Google Cloud Vision 클라이언트.
//!
//! `ImageAnnotator` 포트 구현. 호출 1회당 `images:annotate` POST 1회.
//! 크기 제한을 넘는 페이로드는 전송 전에 거부한다.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use visiontest_core::config::VisionApiConfig;
use visiontest_core::credentials::ApiKey;
use visiontest_core::error::{ApiError, CoreError};
use visiontest_core::models::annotation::AnnotationList;
use visiontest_core::models::feature::Feature;
use visiontest_core::models::image::ImagePayload;
use visiontest_core::ports::annotator::ImageAnnotator;
use visiontest_core::ports::transport::HttpTransport;

use crate::request::BatchAnnotateImagesRequest;
use crate::response;
use crate::transport::ReqwestTransport;

/// Google Cloud Vision `images:annotate` 클라이언트
///
/// **보안**: API 키는 요청 URL 구성에만 사용하며 로그에는 키가 없는
/// 엔드포인트만 기록한다.
pub struct GoogleVisionClient {
    /// HTTP 전송 계층 (클라이언트 수명 동안 소유)
    transport: Arc<dyn HttpTransport>,
    /// 키 쿼리가 없는 엔드포인트
    endpoint: Url,
    api_key: ApiKey,
    /// base64 페이로드 최대 길이
    max_encoded_len: usize,
}

impl GoogleVisionClient {
    /// 설정의 타임아웃으로 reqwest 전송 계층을 만들어 클라이언트 생성
    pub fn new(config: &VisionApiConfig, api_key: ApiKey) -> Result<Self, CoreError> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Self::with_transport(config, api_key, Arc::new(transport))
    }

    /// 전송 계층을 주입하여 클라이언트 생성 (테스트용 가짜 전송 계층 등)
    pub fn with_transport(
        config: &VisionApiConfig,
        api_key: ApiKey,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, CoreError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            CoreError::Config(format!("잘못된 Vision API 엔드포인트: {}: {e}", config.endpoint))
        })?;

        debug!(
            endpoint = %endpoint,
            timeout = config.timeout_secs,
            max_encoded_len = config.max_encoded_len,
            "GoogleVisionClient 초기화"
        );

        Ok(Self {
            transport,
            endpoint,
            api_key,
            max_encoded_len: config.max_encoded_len,
        })
    }

    /// `?key=` 쿼리를 붙인 요청 URL
    fn request_url(&self) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose());
        url.into()
    }

    /// 전송 전 입력 검증: 실패 시 네트워크 호출 없음
    fn validate(&self, image: &ImagePayload, feature: &Feature) -> Result<(), ApiError> {
        if image.is_empty() {
            return Err(ApiError::EmptyImage);
        }

        if feature.max_results == 0 {
            return Err(ApiError::InvalidRequest(
                "maxResults는 1 이상이어야 합니다".to_string(),
            ));
        }

        let encoded_len = image.encoded_len();
        if encoded_len > self.max_encoded_len {
            warn!(
                encoded_len,
                limit = self.max_encoded_len,
                "페이로드 크기 초과 — 전송 생략"
            );
            return Err(ApiError::PayloadTooLarge {
                encoded_len,
                limit: self.max_encoded_len,
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for GoogleVisionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleVisionClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key)
            .field("max_encoded_len", &self.max_encoded_len)
            .finish()
    }
}

#[async_trait]
impl ImageAnnotator for GoogleVisionClient {
    async fn annotate(
        &self,
        image: &ImagePayload,
        feature: Feature,
    ) -> Result<AnnotationList, ApiError> {
        self.validate(image, &feature)?;

        let request_id = Uuid::new_v4();
        let body = BatchAnnotateImagesRequest::single(image, feature).to_body()?;

        debug!(
            %request_id,
            endpoint = %self.endpoint,
            feature = %feature.feature_type,
            max_results = feature.max_results,
            image_size = image.len(),
            body_size = body.len(),
            "Vision API 호출"
        );

        let response = self.transport.post_json(&self.request_url(), body).await?;

        if !response.is_success() {
            let message = response::error_message(&response.body);
            warn!(%request_id, status = response.status, %message, "Vision API 오류 응답");
            return Err(ApiError::ApiStatus {
                code: response.status,
                message,
            });
        }

        let annotations = response::decode_annotations(&response.body, feature.feature_type)?;
        debug!(%request_id, count = annotations.len(), "어노테이션 수신");
        Ok(annotations)
    }

    fn provider_name(&self) -> &str {
        "google-vision"
    }
}

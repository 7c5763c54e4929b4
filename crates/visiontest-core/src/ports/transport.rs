//! HTTP 전송 포트.
//!
//! Vision 클라이언트가 소유하는 HTTP 세션을 추상화한다.
//! 테스트에서는 가짜 전송 계층으로 교체한다.

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP 응답 (상태 코드 + 본문 텍스트)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON POST 전송 계층
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// `url`로 JSON 본문 POST
    ///
    /// 전송 실패(타임아웃 포함)는 `ApiError::Transport`로 반환한다.
    /// 2xx 이외의 상태 코드는 에러가 아니라 응답으로 돌려준다.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse, ApiError>;
}

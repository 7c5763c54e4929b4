//! reqwest 기반 HTTP 전송 계층.
//!
//! `HttpTransport` 포트 구현. 클라이언트 인스턴스는 전역 정적 변수가 아니라
//! 이 구조체가 소유하며, 생성 시 지정한 타임아웃이 모든 요청에 적용된다.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use visiontest_core::error::{ApiError, CoreError, TransportErrorKind};
use visiontest_core::ports::transport::{HttpResponse, HttpTransport};

/// reqwest 전송 계층
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 요청 타임아웃을 적용한 전송 계층 생성
    pub fn new(timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("HTTP 클라이언트 생성 실패: {e}")))?;

        debug!(timeout_ms = timeout.as_millis() as u64, "HTTP 전송 계층 생성");
        Ok(Self { client })
    }
}

/// reqwest 에러 → `ApiError::Transport`
///
/// 메시지에서 URL을 제거한다 (쿼리에 API 키가 들어 있음).
fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    let kind = if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else {
        TransportErrorKind::Other
    };

    ApiError::Transport {
        kind,
        message: error.without_url().to_string(),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;

        debug!(status, body_len = body.len(), "HTTP 응답 수신");
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn post_json_returns_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images:annotate")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({"requests": []})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"responses":[]}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let url = format!("{}/v1/images:annotate", server.url());
        let response = transport
            .post_json(&url, br#"{"requests":[]}"#.to_vec())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"responses":[]}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_not_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images:annotate")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
        let url = format!("{}/v1/images:annotate", server.url());
        let response = transport.post_json(&url, b"{}".to_vec()).await.unwrap();

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        // 연결은 수락하지만 응답하지 않는 서버
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport = ReqwestTransport::new(Duration::from_millis(200)).unwrap();
        let url = format!("http://{addr}/v1/images:annotate?key=secret-key");
        let err = transport.post_json(&url, b"{}".to_vec()).await.unwrap_err();

        assert!(err.is_timeout(), "unexpected error: {err:?}");
        assert!(!err.to_string().contains("secret-key"));
    }

    #[tokio::test]
    async fn refused_connection_is_connect_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        let url = format!("http://{addr}/v1/images:annotate");
        let err = transport.post_json(&url, b"{}".to_vec()).await.unwrap_err();

        assert!(matches!(
            err,
            ApiError::Transport {
                kind: TransportErrorKind::Connect,
                ..
            }
        ));
    }
}

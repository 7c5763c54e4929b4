//! visiontest 핵심 에러 타입.
//!
//! - [`CoreError`]: 설정, 파일 I/O, 이미지 처리 등 로컬 작업 에러
//! - [`ApiError`]: Vision API 호출 1회에서 발생할 수 있는 에러 분류
//!
//! 어떤 에러도 조용히 삼키지 않는다. 콘솔은 출력 후 비정상 종료하고,
//! 캡처 세션은 상태 텍스트로 변환한다.

use std::fmt;

use thiserror::Error;

/// 코어 레이어 에러.
/// 직렬화, 설정, 유효성 검증, 이미지 처리 등 로컬 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류 (API 키 누락 포함)
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 이미지 디코딩/인코딩 실패
    #[error("이미지 처리 에러: {0}")]
    Image(String),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 전송 계층 실패 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// 요청 타임아웃 초과
    Timeout,
    /// 연결 실패 (DNS, TCP, TLS)
    Connect,
    /// 기타 (요청 빌드, 본문 읽기 등)
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Vision API 호출 에러.
///
/// `Annotate` 1회 호출의 모든 실패가 이 enum 중 하나로 귀결된다.
/// 자동 재시도는 하지 않는다.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 이미지 페이로드가 비어 있음 (네트워크 호출 없음)
    #[error("이미지 페이로드가 비어 있음")]
    EmptyImage,

    /// 잘못된 요청 파라미터 (네트워크 호출 없음)
    #[error("잘못된 요청: {0}")]
    InvalidRequest(String),

    /// Base64 인코딩 크기가 제한 초과 (네트워크 호출 없음)
    #[error("페이로드 크기 초과: base64 {encoded_len}자 > 제한 {limit}자")]
    PayloadTooLarge {
        /// 인코딩 후 길이 (문자 수)
        encoded_len: usize,
        /// 허용 최대 길이
        limit: usize,
    },

    /// 네트워크/DNS/TLS 실패 또는 타임아웃
    #[error("전송 실패 ({kind}): {message}")]
    Transport {
        /// 실패 유형
        kind: TransportErrorKind,
        /// 상세 메시지
        message: String,
    },

    /// 2xx 이외의 HTTP 상태 코드
    #[error("API 상태 에러 ({code}): {message}")]
    ApiStatus {
        /// HTTP 상태 코드
        code: u16,
        /// 제공자 에러 메시지 (없으면 본문 앞부분)
        message: String,
    },

    /// 응답 본문 파싱 실패 (빈 본문, 잘린 JSON 등)
    #[error("응답 디코딩 실패: {0}")]
    Decode(String),

    /// 이미지 단위로 제공자가 보고한 에러
    #[error("제공자 에러: {message}")]
    Provider {
        /// google.rpc.Code 값 (없으면 None)
        code: Option<i32>,
        /// 제공자 메시지 (원문 그대로)
        message: String,
    },
}

impl ApiError {
    /// 타임아웃으로 인한 전송 실패인지 여부
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ApiError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// 네트워크 호출 이전에 거부된 에러인지 여부
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            ApiError::EmptyImage | ApiError::InvalidRequest(_) | ApiError::PayloadTooLarge { .. }
        )
    }
}

//! 이미지 페이로드 모델.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use serde::{Deserialize, Serialize};

/// 전송할 인코딩된 이미지 (PNG, JPEG 등 파일 바이트 그대로)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// 인코딩된 이미지 바이트
    pub bytes: Vec<u8>,
    /// 이미지 형식 (예: "png", "jpeg")
    pub format: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, format: impl Into<String>) -> Self {
        Self {
            bytes,
            format: format.into(),
        }
    }

    /// PNG 페이로드 생성
    pub fn png(bytes: Vec<u8>) -> Self {
        Self::new(bytes, "png")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 패딩 포함 표준 Base64 길이: 인코딩 없이 계산
    pub fn encoded_len(&self) -> usize {
        base64_len(self.bytes.len())
    }

    /// 표준 Base64 인코딩
    pub fn to_base64(&self) -> String {
        B64.encode(&self.bytes)
    }
}

// 바이트 배열 전체를 Debug로 찍지 않는다
impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// `n` 바이트의 패딩 포함 Base64 길이
pub fn base64_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

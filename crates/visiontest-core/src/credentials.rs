//! API 키 로드.
//!
//! 키는 프로세스 시작 시 로컬 파일(또는 환경 변수)에서 읽으며
//! 코드에 하드코딩하지 않는다. `Debug`/`Display` 어디에도 원문이 찍히지 않는다.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CoreError;

/// API 키 환경 변수 이름 (키 파일이 없을 때 사용)
pub const API_KEY_ENV: &str = "VISIONTEST_API_KEY";

/// Vision API 키 (메모리에만 유지)
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// 문자열에서 키 생성: 앞뒤 공백/개행 제거, 빈 값 거부
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Config("API 키가 비어 있습니다".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// 키 파일에서 로드
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("API 키 파일 읽기 실패: {}: {}", path.display(), e))
        })?;
        let key = Self::parse(&content).map_err(|_| {
            CoreError::Config(format!("API 키 파일이 비어 있습니다: {}", path.display()))
        })?;
        debug!(path = %path.display(), "API 키 파일 로드");
        Ok(key)
    }

    /// API 키 로드 순서
    ///
    /// 1. 명시적으로 지정된 키 파일 (없으면 에러, 환경 변수로 넘어가지 않음)
    /// 2. 기본 위치의 키 파일 (존재할 때만)
    /// 3. `VISIONTEST_API_KEY` 환경 변수
    pub fn resolve(explicit: Option<&Path>, default: &Path) -> Result<Self, CoreError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if default.exists() {
            return Self::from_file(default);
        }

        match std::env::var(API_KEY_ENV) {
            Ok(value) => {
                debug!(env = API_KEY_ENV, "환경 변수에서 API 키 로드");
                Self::parse(&value)
            }
            Err(_) => Err(CoreError::Config(format!(
                "API 키 미설정: {} 파일 또는 {} 환경 변수가 필요합니다",
                default.display(),
                API_KEY_ENV
            ))),
        }
    }

    /// 요청 URL 구성용 원문
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

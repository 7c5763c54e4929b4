//! 요청 기능(feature) 모델.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 감지 모드: Vision API `features[].type` 값
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    /// 라벨 감지 (`LABEL_DETECTION`)
    LabelDetection,
    /// 객체 위치 감지 (`OBJECT_LOCALIZATION`)
    ObjectLocalization,
    /// 텍스트 감지 (`TEXT_DETECTION`)
    TextDetection,
}

impl FeatureType {
    /// 와이어 포맷 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LabelDetection => "LABEL_DETECTION",
            Self::ObjectLocalization => "OBJECT_LOCALIZATION",
            Self::TextDetection => "TEXT_DETECTION",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = String;

    /// 짧은 이름(`label`, `object`, `text`)과 와이어 이름 모두 허용
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" | "labels" | "label_detection" => Ok(Self::LabelDetection),
            "object" | "objects" | "object_localization" => Ok(Self::ObjectLocalization),
            "text" | "text_detection" => Ok(Self::TextDetection),
            other => Err(format!(
                "알 수 없는 기능 타입: {other} (label, object, text 중 하나)"
            )),
        }
    }
}

/// 요청 기능 1건: `{"type": ..., "maxResults": ...}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// 감지 모드
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// 최대 결과 수
    pub max_results: u32,
}

impl Feature {
    pub fn new(feature_type: FeatureType, max_results: u32) -> Self {
        Self {
            feature_type,
            max_results,
        }
    }
}

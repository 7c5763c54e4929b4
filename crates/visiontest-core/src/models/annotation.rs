//! 어노테이션(감지 결과) 모델.
//!
//! 제공자 응답 스키마와 분리된 도메인 구조. 네트워크 어댑터가
//! 응답을 디코딩한 뒤 이 타입으로 변환한다.

use serde::{Deserialize, Serialize};

/// 픽셀 좌표 꼭짓점
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 정규화 좌표 꼭짓점 (0.0 ~ 1.0, 객체 위치 감지에서 사용)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedVertex {
    pub x: f32,
    pub y: f32,
}

/// 경계 다각형: 감지 영역을 둘러싼 꼭짓점 목록 (순서 유지)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingPoly {
    /// 픽셀 좌표 꼭짓점 (텍스트 감지)
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    /// 정규화 좌표 꼭짓점 (객체 위치 감지)
    #[serde(default)]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

impl BoundingPoly {
    /// 픽셀 꼭짓점의 축 정렬 외접 사각형 `(x, y, width, height)`
    pub fn bounding_rect(&self) -> Option<(i32, i32, u32, u32)> {
        let min_x = self.vertices.iter().map(|v| v.x).min()?;
        let max_x = self.vertices.iter().map(|v| v.x).max()?;
        let min_y = self.vertices.iter().map(|v| v.y).min()?;
        let max_y = self.vertices.iter().map(|v| v.y).max()?;
        Some((
            min_x,
            min_y,
            max_x.abs_diff(min_x),
            max_y.abs_diff(min_y),
        ))
    }
}

/// 감지 결과 1건 (라벨, 텍스트 조각, 객체)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// 설명 (라벨명, 인식 텍스트, 객체명)
    pub description: String,
    /// 텍스트 로케일 (예: "en")
    pub locale: Option<String>,
    /// 신뢰도 점수 (0.0 ~ 1.0)
    pub score: Option<f32>,
    /// Knowledge Graph 엔티티 ID
    pub mid: Option<String>,
    /// 경계 다각형 (텍스트/객체 감지)
    pub bounding_poly: Option<BoundingPoly>,
}

/// 어노테이션 목록: 응답 순서를 그대로 유지한다
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationList {
    pub annotations: Vec<Annotation>,
    /// 텍스트 감지 시 전체 텍스트 (`fullTextAnnotation.text`)
    pub full_text: Option<String>,
}

impl AnnotationList {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self {
            annotations,
            full_text: None,
        }
    }

    pub fn with_full_text(mut self, full_text: Option<String>) -> Self {
        self.full_text = full_text;
        self
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.annotations.iter()
    }

    /// 비어 있지 않은 설명만 순서대로 반환
    pub fn descriptions(&self) -> Vec<&str> {
        self.annotations
            .iter()
            .map(|a| a.description.as_str())
            .filter(|d| !d.is_empty())
            .collect()
    }
}

impl IntoIterator for AnnotationList {
    type Item = Annotation;
    type IntoIter = std::vec::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationList {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

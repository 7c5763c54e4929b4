//! 콘솔 출력 포맷.

use visiontest_core::models::annotation::AnnotationList;
use visiontest_core::models::feature::FeatureType;

/// 어노테이션 → 출력 줄 목록 (설명이 빈 항목은 건너뜀)
///
/// - 라벨: 설명만
/// - 텍스트: 로케일이 있으면 `설명 [locale]`
/// - 객체: 점수가 있으면 `설명 (0.87)`
pub fn render_lines(annotations: &AnnotationList, feature: FeatureType) -> Vec<String> {
    annotations
        .iter()
        .filter(|a| !a.description.is_empty())
        .map(|a| match (feature, a.locale.as_deref(), a.score) {
            (FeatureType::TextDetection, Some(locale), _) => {
                format!("{} [{locale}]", a.description)
            }
            (FeatureType::ObjectLocalization, _, Some(score)) => {
                format!("{} ({score:.2})", a.description)
            }
            _ => a.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use visiontest_core::models::annotation::Annotation;

    fn annotation(description: &str, locale: Option<&str>, score: Option<f32>) -> Annotation {
        Annotation {
            description: description.to_string(),
            locale: locale.map(String::from),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn labels_print_description_only() {
        let list = AnnotationList::new(vec![
            annotation("Cat", None, Some(0.98)),
            annotation("", None, None),
            annotation("Whiskers", None, Some(0.9)),
        ]);
        assert_eq!(
            render_lines(&list, FeatureType::LabelDetection),
            vec!["Cat", "Whiskers"]
        );
    }

    #[test]
    fn text_prints_locale() {
        let list = AnnotationList::new(vec![
            annotation("Hello", Some("en"), None),
            annotation("Hello", None, None),
        ]);
        assert_eq!(
            render_lines(&list, FeatureType::TextDetection),
            vec!["Hello [en]", "Hello"]
        );
    }

    #[test]
    fn objects_print_score() {
        let list = AnnotationList::new(vec![annotation("Bicycle wheel", None, Some(0.8912))]);
        assert_eq!(
            render_lines(&list, FeatureType::ObjectLocalization),
            vec!["Bicycle wheel (0.89)"]
        );
    }
}

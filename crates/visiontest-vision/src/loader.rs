//! 이미지 파일 로드.

use std::fs;
use std::path::Path;

use tracing::debug;
use visiontest_core::error::CoreError;
use visiontest_core::models::image::ImagePayload;

/// 이미지 파일을 그대로 읽어 페이로드 생성
///
/// 재인코딩하지 않는다. 빈 파일이나 이미지로 인식되지 않는 파일은 거부한다.
pub fn load_image_file(path: &Path) -> Result<ImagePayload, CoreError> {
    let bytes = fs::read(path).map_err(|e| {
        CoreError::Io(std::io::Error::new(e.kind(), format!("{}: {e}", path.display())))
    })?;

    if bytes.is_empty() {
        return Err(CoreError::Validation {
            field: "path".to_string(),
            message: format!("빈 파일: {}", path.display()),
        });
    }

    let format = image::guess_format(&bytes).map_err(|e| CoreError::Validation {
        field: "path".to_string(),
        message: format!("이미지 형식 인식 실패: {}: {e}", path.display()),
    })?;
    let format = format.extensions_str().first().copied().unwrap_or("bin");

    debug!(path = %path.display(), size = bytes.len(), format, "이미지 파일 로드");
    Ok(ImagePayload::new(bytes, format))
}

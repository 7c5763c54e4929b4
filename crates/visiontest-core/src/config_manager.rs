//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리(또는 지정 경로)에 JSON 파일로 설정을 저장/로드한다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 기본 API 키 파일 이름
pub const API_KEY_FILE_NAME: &str = "gcp.apikey";

/// 설정 관리자
///
/// 설정 파일의 로드/저장 및 런타임 설정 변경을 관리한다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 플랫폼 기본 경로에서 설정 관리자 생성
    ///
    /// 설정 파일이 없으면 기본 설정을 생성하고 저장한다.
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);
        Self::with_path(config_path)
    }

    /// 지정된 경로로 설정 관리자 생성
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 현재 설정
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// 설정 업데이트 및 파일 저장
    pub fn update(&mut self, new_config: AppConfig) -> Result<(), CoreError> {
        Self::save_to_file(&self.config_path, &new_config)?;
        self.config = new_config;
        debug!("설정 저장 완료: {}", self.config_path.display());
        Ok(())
    }

    /// 특정 필드만 업데이트
    pub fn update_with<F>(&mut self, updater: F) -> Result<&AppConfig, CoreError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.clone();
        updater(&mut config);
        self.update(config)?;
        Ok(&self.config)
    }

    /// 설정 파일 경로
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 설정 다시 로드
    pub fn reload(&mut self) -> Result<(), CoreError> {
        self.config = Self::load_from_file(&self.config_path)?;
        info!("설정 다시 로드 완료");
        Ok(())
    }

    /// 설정에 명시된 API 키 파일 경로
    pub fn configured_api_key_file(&self) -> Option<&Path> {
        self.config.vision_api.api_key_file.as_deref()
    }

    /// 기본 API 키 파일 경로 (설정 파일 옆의 `gcp.apikey`)
    pub fn default_api_key_path(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(|dir| dir.join(API_KEY_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(API_KEY_FILE_NAME))
    }

    /// 플랫폼별 설정 디렉토리 경로
    ///
    /// - macOS: `~/Library/Application Support/com.visiontest.visiontest/`
    /// - Windows: `%APPDATA%\visiontest\visiontest\config\`
    /// - Linux: `~/.config/visiontest/`
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("com", "visiontest", "visiontest")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }

    fn load_from_file(path: &Path) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    fn save_to_file(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::Config(format!("설정 직렬화 실패: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            CoreError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let manager = ConfigManager::with_path(config_path.clone()).unwrap();
        assert!(config_path.exists());
        assert_eq!(manager.get().vision_api.timeout_secs, 30);
    }

    #[test]
    fn update_and_persist_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut manager = ConfigManager::with_path(config_path.clone()).unwrap();
        manager
            .update_with(|c| {
                c.vision_api.timeout_secs = 10;
                c.vision_api.max_encoded_len = 500_000;
            })
            .unwrap();

        let manager2 = ConfigManager::with_path(config_path).unwrap();
        assert_eq!(manager2.get().vision_api.timeout_secs, 10);
        assert_eq!(manager2.get().vision_api.max_encoded_len, 500_000);
    }

    #[test]
    fn reload_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.json");

        let mut manager = ConfigManager::with_path(config_path.clone()).unwrap();

        let mut config = manager.get().clone();
        config.vision_api.default_max_results = 3;
        fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        manager.reload().unwrap();
        assert_eq!(manager.get().vision_api.default_max_results, 3);
    }

    #[test]
    fn malformed_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        let err = ConfigManager::with_path(config_path).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn api_key_path_defaults_next_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let mut manager = ConfigManager::with_path(config_path).unwrap();
        assert_eq!(
            manager.default_api_key_path(),
            temp_dir.path().join(API_KEY_FILE_NAME)
        );
        assert!(manager.configured_api_key_file().is_none());

        let custom = temp_dir.path().join("keys").join("vision.key");
        manager
            .update_with(|c| c.vision_api.api_key_file = Some(custom.clone()))
            .unwrap();
        assert_eq!(manager.configured_api_key_file(), Some(custom.as_path()));
    }
}

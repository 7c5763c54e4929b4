//! # visiontest
//!
//! Google Cloud Vision 콘솔 클라이언트 진입점.
//! 이미지 경로를 받아 감지 요청 1회를 보내고 결과 설명을 한 줄씩 출력한다.
//! 정상 완료 시 종료 코드 0, 파일/설정/API 실패 시 1.

mod output;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use visiontest_core::config::AppConfig;
use visiontest_core::config_manager::ConfigManager;
use visiontest_core::credentials::ApiKey;
use visiontest_core::models::feature::{Feature, FeatureType};
use visiontest_core::ports::annotator::ImageAnnotator;
use visiontest_network::vision_client::GoogleVisionClient;
use visiontest_vision::encoder::decode_to_frame;
use visiontest_vision::frame_slot::FrameSlot;
use visiontest_vision::loader::load_image_file;
use visiontest_vision::session::CaptureSession;

/// Google Cloud Vision 감지 데모 클라이언트
#[derive(Parser, Debug)]
#[command(name = "visiontest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 이미지 파일 경로 (생략 시 표준 입력으로 한 번 묻는다)
    path: Option<PathBuf>,

    /// 감지 기능 (label, object, text)
    #[arg(long, short = 'f', default_value = "label")]
    feature: FeatureType,

    /// 최대 결과 수 (기본: 설정값)
    #[arg(long, short = 'n')]
    max_results: Option<u32>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// API 키 파일 경로 (기본: 설정 디렉토리의 gcp.apikey)
    #[arg(long)]
    api_key_file: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,

    /// 이미지를 원시 프레임으로 디코딩해 캡처 세션 경로로 처리
    #[arg(long)]
    frame: bool,
}

/// 이미지 경로 프롬프트 (1회)
fn prompt_path() -> Result<PathBuf> {
    println!("Enter the path to an image");
    io::stdout().flush().context("표준 출력 플러시 실패")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("표준 입력 읽기 실패")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("이미지 경로가 입력되지 않았습니다");
    }
    Ok(PathBuf::from(trimmed))
}

/// 단일 이미지 감지: 콘솔 클라이언트 기본 경로
async fn annotate_file(client: &dyn ImageAnnotator, path: &Path, feature: Feature) -> Result<()> {
    let payload = load_image_file(path)?;
    info!(
        path = %path.display(),
        size = payload.len(),
        feature = %feature.feature_type,
        "이미지 감지 요청"
    );

    let annotations = client.annotate(&payload, feature).await?;
    for line in output::render_lines(&annotations, feature.feature_type) {
        println!("{line}");
    }
    Ok(())
}

/// 캡처 세션 경로: 파일을 원시 프레임으로 디코딩해 슬롯에 넣고 트리거 1회
async fn annotate_as_frame(
    config: &AppConfig,
    client: Arc<dyn ImageAnnotator>,
    path: &Path,
) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("파일 읽기 실패: {}", path.display()))?;
    let frame = decode_to_frame(&bytes)?;
    debug!(width = frame.width(), height = frame.height(), "프레임 디코딩");

    let slot = Arc::new(FrameSlot::new());
    slot.push(frame);
    debug!(frames = slot.frames_received(), "프레임 슬롯 적재");

    let session = CaptureSession::from_config(config, slot, client);
    let status = session.trigger().await;
    println!("{status}");

    ensure!(status.is_completed(), "캡처 세션이 완료되지 않았습니다");
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone())?,
        None => ConfigManager::new()?,
    };
    let mut config = manager.get().clone();

    let max_results = args
        .max_results
        .unwrap_or(config.vision_api.default_max_results);
    config.vision_api.default_max_results = max_results;
    config.capture.feature = args.feature;

    let path = match args.path {
        Some(path) => path,
        None => prompt_path()?,
    };

    // CLI 인자 > 설정 파일 > 기본 위치/환경 변수
    let explicit_key = args
        .api_key_file
        .as_deref()
        .or_else(|| manager.configured_api_key_file());
    let api_key = ApiKey::resolve(explicit_key, &manager.default_api_key_path())?;
    let client: Arc<dyn ImageAnnotator> =
        Arc::new(GoogleVisionClient::new(&config.vision_api, api_key)?);

    if args.frame {
        annotate_as_frame(&config, client, &path).await
    } else {
        let feature = Feature::new(args.feature, max_results);
        annotate_file(client.as_ref(), &path, feature).await
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // 로그는 stderr로: stdout에는 감지 결과만
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("오류: {e:#}");
            ExitCode::FAILURE
        }
    }
}

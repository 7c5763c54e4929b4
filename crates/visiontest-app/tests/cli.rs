//! `visiontest` 바이너리 통합 테스트.
//!
//! 실제 실행 파일을 띄워 종료 코드, 표준 출력, 경로 프롬프트를 확인한다.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use image::{ImageFormat, RgbImage};
use mockito::Matcher;
use tempfile::TempDir;
use visiontest_core::config_manager::ConfigManager;

const ANNOTATE_PATH: &str = "/v1/images:annotate";

const LABELS: &str = r#"{"responses":[{"labelAnnotations":[{"description":"Cat","score":0.98},{"description":"Whiskers","score":0.91}]}]}"#;

struct Workspace {
    _dir: TempDir,
    config: PathBuf,
    key_file: PathBuf,
    image: PathBuf,
}

fn workspace(endpoint: &str) -> Workspace {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let mut manager = ConfigManager::with_path(config.clone()).unwrap();
    let endpoint = endpoint.to_string();
    manager
        .update_with(|c| {
            c.vision_api.endpoint = endpoint;
            c.vision_api.timeout_secs = 5;
        })
        .unwrap();

    let key_file = dir.path().join("vision.key");
    fs::write(&key_file, "cli-key\n").unwrap();

    let image = dir.path().join("cat.png");
    RgbImage::from_fn(20, 12, |x, y| image::Rgb([x as u8 * 12, y as u8 * 20, 64]))
        .save_with_format(&image, ImageFormat::Png)
        .unwrap();

    Workspace {
        _dir: dir,
        config,
        key_file,
        image,
    }
}

fn visiontest(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_visiontest"));
    cmd.arg("--config")
        .arg(&ws.config)
        .arg("--api-key-file")
        .arg(&ws.key_file)
        .env_remove("VISIONTEST_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

fn label_mock(server: &mut mockito::ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", ANNOTATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "cli-key".into()))
        .match_body(Matcher::Regex(r#""type":"LABEL_DETECTION""#.into()))
        .with_status(status)
        .with_body(body)
        .expect(1)
        .create()
}

#[test]
fn labels_are_printed_one_per_line() {
    let mut server = mockito::Server::new();
    let mock = label_mock(&mut server, 200, LABELS);
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));

    let output = visiontest(&ws).arg(&ws.image).output().expect("run visiontest");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(stdout_lines(&output), ["Cat", "Whiskers"]);
    mock.assert();
}

#[test]
fn path_prompt_reads_stdin_once() {
    let mut server = mockito::Server::new();
    let mock = label_mock(&mut server, 200, LABELS);
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));

    let mut child = visiontest(&ws)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn visiontest");
    writeln!(child.stdin.take().unwrap(), "{}", ws.image.display()).unwrap();
    let output = child.wait_with_output().expect("wait for visiontest");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(
        stdout_lines(&output),
        ["Enter the path to an image", "Cat", "Whiskers"]
    );
    mock.assert();
}

#[test]
fn missing_image_exits_nonzero_without_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ANNOTATE_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create();
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));

    let output = visiontest(&ws)
        .arg(ws.image.with_file_name("nope.png"))
        .output()
        .expect("run visiontest");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.png"));
    mock.assert();
}

#[test]
fn server_error_exits_nonzero() {
    let mut server = mockito::Server::new();
    let mock = label_mock(&mut server, 500, "Internal Server Error");
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));

    let output = visiontest(&ws).arg(&ws.image).output().expect("run visiontest");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("500"));
    mock.assert();
}

#[test]
fn missing_key_file_exits_nonzero_even_with_env_key() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ANNOTATE_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create();
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));
    fs::remove_file(&ws.key_file).unwrap();

    let output = visiontest(&ws)
        .env("VISIONTEST_API_KEY", "env-key")
        .arg(&ws.image)
        .output()
        .expect("run visiontest");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("vision.key"));
    mock.assert();
}

#[test]
fn frame_mode_prints_session_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", ANNOTATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "cli-key".into()))
        .match_body(Matcher::Regex(r#""type":"TEXT_DETECTION""#.into()))
        .with_status(200)
        .with_body(
            r#"{"responses":[{"textAnnotations":[{"description":"Hello","locale":"en"}],"fullTextAnnotation":{"text":"Hello\n"}}]}"#,
        )
        .expect(1)
        .create();
    let ws = workspace(&format!("{}{}", server.url(), ANNOTATE_PATH));

    let output = visiontest(&ws)
        .args(["--frame", "--feature", "text"])
        .arg(&ws.image)
        .output()
        .expect("run visiontest");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(stdout_lines(&output), ["Hello"]);
    mock.assert();
}

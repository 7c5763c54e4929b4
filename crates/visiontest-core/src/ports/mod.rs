//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! `visiontest-network`, `visiontest-vision`이 이 trait들을 구현하며,
//! `visiontest-app`에서 `Arc<dyn T>`로 와이어링한다.

pub mod annotator;
pub mod frame_source;
pub mod transport;

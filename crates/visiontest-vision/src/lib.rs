//! # visiontest-vision
//!
//! 이미지 처리 크레이트.
//! 파일 로드, 원시 프레임 PNG 인코딩(크기 제한 맞춤 축소 포함),
//! 단일 슬롯 프레임 버퍼, 트리거 기반 캡처 세션을 담당한다.
//! 카메라 캡처/변환 자체는 호스트 런타임의 책임이다.

pub mod encoder;
pub mod frame_slot;
pub mod loader;
pub mod session;

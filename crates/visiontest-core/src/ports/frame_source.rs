//! 프레임 공급 포트.
//!
//! 구현: `visiontest-vision` crate (`FrameSlot`)

use std::sync::Arc;

use crate::models::frame::RawFrame;

/// 최신 프레임 공급자: 캡처 서브시스템과 클라이언트 사이의 인계 지점
pub trait FrameSource: Send + Sync {
    /// 가장 최근에 완성된 프레임 (없으면 None)
    fn latest_frame(&self) -> Option<Arc<RawFrame>>;
}

//! 단일 슬롯 프레임 버퍼.
//!
//! 캡처 서브시스템(생산자)은 변환이 끝난 프레임을 `push`하고,
//! 세션(소비자)은 트리거 시점에 `latest`로 가장 최근 프레임만 읽는다.
//! 슬롯은 항상 최대 1개 프레임만 보관한다.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use visiontest_core::models::frame::RawFrame;
use visiontest_core::ports::frame_source::FrameSource;

/// 최신 프레임 1개를 보관하는 슬롯
#[derive(Debug, Default)]
pub struct FrameSlot {
    slot: Mutex<Option<Arc<RawFrame>>>,
    /// 누적 수신 프레임 수
    received: AtomicU64,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 프레임으로 교체. 이전 프레임이 있었으면 true
    pub fn push(&self, frame: RawFrame) -> bool {
        self.received.fetch_add(1, Ordering::Relaxed);
        self.slot.lock().replace(Arc::new(frame)).is_some()
    }

    /// 최신 프레임 (슬롯은 비우지 않음)
    pub fn latest(&self) -> Option<Arc<RawFrame>> {
        self.slot.lock().clone()
    }

    /// 누적 수신 프레임 수
    pub fn frames_received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }
}

impl FrameSource for FrameSlot {
    fn latest_frame(&self) -> Option<Arc<RawFrame>> {
        self.latest()
    }
}

//! 도메인 모델.

pub mod annotation;
pub mod feature;
pub mod frame;
pub mod image;

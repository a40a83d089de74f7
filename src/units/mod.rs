//! 단위 정의 및 변환 모듈 모음.

pub mod stress;

pub use stress::{convert_stress, from_kpa, to_kpa, StressUnit};

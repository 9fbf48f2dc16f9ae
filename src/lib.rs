//! 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 엔진을 쓴다.
//!
//! - [`conversion`] / [`units`]: 차원별 단위 변환 엔진
//! - [`growth`]: WHO 기준 영유아 성장 백분위 계산
//! - [`i18n`]: ru/en 문자열 팩

pub mod app;
pub mod config;
pub mod conversion;
pub mod growth;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;

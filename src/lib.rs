//! 분석 파이프라인을 라이브러리로 분리하여 CLI와 플롯 뷰어가 같은 코드를 공유한다.

pub mod app;
pub mod config;
pub mod flowloop;
pub mod i18n;
pub mod plot;
pub mod units;

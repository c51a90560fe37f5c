use crate::config::Config;
use crate::flowloop::constants::PhysicalConstants;
use crate::flowloop::loader::{self, DataFormatError};
use crate::flowloop::pipeline::{self, AnalysisReport, PipelineError, Section};
use crate::i18n::{keys, Translator};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 측정 데이터 형식 오류
    Data(DataFormatError),
    /// 분석 파이프라인 오류
    Pipeline(PipelineError),
    /// 플롯 창 표시 오류
    Plot(eframe::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Data(e) => write!(f, "측정 데이터 오류: {e}"),
            AppError::Pipeline(e) => write!(f, "분석 오류: {e}"),
            AppError::Plot(e) => write!(f, "플롯 표시 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<DataFormatError> for AppError {
    fn from(value: DataFormatError) -> Self {
        AppError::Data(value)
    }
}

impl From<PipelineError> for AppError {
    fn from(value: PipelineError) -> Self {
        AppError::Pipeline(value)
    }
}

impl From<eframe::Error> for AppError {
    fn from(value: eframe::Error) -> Self {
        AppError::Plot(value)
    }
}

/// 측정 파일을 읽고 전체 분석 파이프라인을 실행한 뒤 콘솔 리포트를 출력한다.
pub fn run(
    config: &Config,
    constants: &PhysicalConstants,
    tr: &Translator,
) -> Result<AnalysisReport, AppError> {
    let table = loader::load_table(&config.data_file)?;
    let report = pipeline::analyze(&table, constants, config.outlier_policy)?;
    print_report(&report, tr);
    Ok(report)
}

/// 구간 태그에 해당하는 번역 키.
pub fn section_key(section: Section) -> &'static str {
    match section {
        Section::FrictionFactor => keys::SECTION_FRICTION_FACTOR,
        Section::GlobeValve => keys::SECTION_GLOBE_VALVE,
        Section::BallValve => keys::SECTION_BALL_VALVE,
    }
}

fn print_report(report: &AnalysisReport, tr: &Translator) {
    println!("\n=== {} ===", tr.t(keys::REPORT_TITLE));

    println!("{}:", tr.t(keys::REPORT_FLOW_SPEED_HEADING));
    for (index, speed) in report.sample_index.iter().zip(&report.flow_speed) {
        println!("  {} {index:>3}: {speed:.4} m/s", tr.t(keys::REPORT_SAMPLE));
    }

    for series in &report.series {
        println!("\n{}", tr.t(section_key(series.section)));
        println!("  {}: {:.6}", tr.t(keys::REPORT_AVERAGE), series.summary.average);
        println!(
            "  {}: {:.2}%",
            tr.t(keys::REPORT_RELATIVE_ERROR),
            series.summary.relative_error_pct
        );
        println!(
            "  {}: {:.2}%",
            tr.t(keys::REPORT_RELATIVE_RMSE),
            series.summary.relative_rmse_pct
        );
    }
}

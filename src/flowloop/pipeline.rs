use super::constants::PhysicalConstants;
use super::hydraulics::{self, HydraulicsError};
use super::loader::MeasurementTable;
use super::normalize;
use super::outliers::OutlierPolicy;
use super::stats::{self, SeriesSummary};

/// 세 측정 구간을 구분하는 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    FrictionFactor,
    GlobeValve,
    BallValve,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::FrictionFactor => "마찰계수",
            Section::GlobeValve => "글로브 밸브",
            Section::BallValve => "볼 밸브",
        };
        write!(f, "{name}")
    }
}

/// 이상치 제거와 요약 통계를 마친 유도 시계열 한 개.
#[derive(Debug, Clone)]
pub struct AnalyzedSeries {
    pub section: Section,
    /// 생존 샘플 값
    pub values: Vec<f64>,
    /// 생존 샘플 번호. 원본 순서를 보존하는 부분 수열이며 `values`와 길이가 같다.
    pub indices: Vec<u32>,
    /// 이상적 기준값
    pub reference: f64,
    pub summary: SeriesSummary,
}

/// 파이프라인 전체 결과.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// 원본 샘플 번호
    pub sample_index: Vec<u32>,
    /// 샘플별 유속 [m/s] (필터 이전, 원본 순서)
    pub flow_speed: Vec<f64>,
    /// 마찰계수, 글로브, 볼 순서의 세 시계열
    pub series: Vec<AnalyzedSeries>,
}

/// 파이프라인 단계에서 올라오는 오류.
#[derive(Debug)]
pub enum PipelineError {
    /// 유도량 계산 오류
    Hydraulics(HydraulicsError),
    /// 해당 구간의 모든 샘플이 이상치로 제거됨
    EmptySeries(Section),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Hydraulics(e) => write!(f, "유도량 계산 오류: {e}"),
            PipelineError::EmptySeries(section) => {
                write!(f, "{section} 구간의 모든 샘플이 이상치로 제거되었습니다")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<HydraulicsError> for PipelineError {
    fn from(value: HydraulicsError) -> Self {
        PipelineError::Hydraulics(value)
    }
}

/// 정규화 → 유도량 계산 → 이상치 제거 → 요약 통계까지 한 번에 수행한다.
///
/// 세 유도 시계열은 각자 원본 샘플 번호의 복사본을 가지고 독립적으로 필터링되므로
/// 생존 번호열이 서로 다를 수 있다.
pub fn analyze(
    raw: &MeasurementTable,
    constants: &PhysicalConstants,
    policy: OutlierPolicy,
) -> Result<AnalysisReport, PipelineError> {
    let si = normalize::to_si(raw);
    let derived = hydraulics::derive_series(&si, constants)?;

    let series = vec![
        analyze_section(
            Section::FrictionFactor,
            &derived.friction_factor,
            &si.index,
            constants.ideal_friction_factor,
            policy,
        )?,
        analyze_section(
            Section::GlobeValve,
            &derived.k_globe,
            &si.index,
            constants.ideal_k_globe,
            policy,
        )?,
        analyze_section(
            Section::BallValve,
            &derived.k_ball,
            &si.index,
            constants.ideal_k_ball,
            policy,
        )?,
    ];

    Ok(AnalysisReport {
        sample_index: si.index,
        flow_speed: derived.flow_speed,
        series,
    })
}

fn analyze_section(
    section: Section,
    values: &[f64],
    base_indices: &[u32],
    reference: f64,
    policy: OutlierPolicy,
) -> Result<AnalyzedSeries, PipelineError> {
    let (kept_values, kept_indices) = policy.apply(values, base_indices);
    let summary = stats::summarize(&kept_values, reference)
        .map_err(|_| PipelineError::EmptySeries(section))?;
    Ok(AnalyzedSeries {
        section,
        values: kept_values,
        indices: kept_indices,
        reference,
        summary,
    })
}

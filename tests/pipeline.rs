//! 파이프라인 전체(정규화→유도→필터→통계)의 정렬 불변식 테스트.
use flowloop_analysis::flowloop::constants::PhysicalConstants;
use flowloop_analysis::flowloop::loader::MeasurementTable;
use flowloop_analysis::flowloop::outliers::OutlierPolicy;
use flowloop_analysis::flowloop::pipeline::{self, PipelineError, Section};

fn is_subsequence(sub: &[u32], full: &[u32]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

fn lab_table() -> MeasurementTable {
    // 5번 샘플의 직관 차압만 비정상적으로 크다.
    MeasurementTable {
        index: vec![1, 2, 3, 4, 5, 6, 7, 8],
        flow_rate: vec![16.8, 16.9, 17.0, 16.7, 16.9, 17.1, 16.8, 17.0],
        diameter: vec![1.025; 8],
        dp_straight: vec![15.1, 14.9, 15.0, 15.2, 150.0, 14.8, 15.1, 15.0],
        dp_globe: vec![63.0, 63.4, 62.8, 63.1, 63.2, 62.9, 63.3, 63.0],
        dp_ball: vec![14.3, 14.4, 14.2, 14.3, 14.5, 14.2, 14.4, 14.3],
    }
}

#[test]
fn surviving_indices_are_aligned_subsequences() {
    let raw = lab_table();
    let constants = PhysicalConstants::default();
    let report = pipeline::analyze(&raw, &constants, OutlierPolicy::Iqr).expect("analyze");

    assert_eq!(report.flow_speed.len(), raw.len());
    assert_eq!(report.series.len(), 3);
    for series in &report.series {
        assert_eq!(series.values.len(), series.indices.len(), "{:?}", series.section);
        assert!(
            is_subsequence(&series.indices, &raw.index),
            "{:?}: {:?}",
            series.section,
            series.indices
        );
    }

    // 직관 차압이 튄 5번 샘플은 마찰계수 시계열에서 빠져야 한다.
    let friction = report
        .series
        .iter()
        .find(|s| s.section == Section::FrictionFactor)
        .expect("friction series");
    assert!(!friction.indices.contains(&5));
    assert_eq!(friction.indices.len(), 7);
}

#[test]
fn series_are_filtered_independently() {
    let raw = lab_table();
    let constants = PhysicalConstants::default();
    let report = pipeline::analyze(&raw, &constants, OutlierPolicy::Iqr).expect("analyze");

    // 5번 행의 마찰계수 이상은 글로브/볼 시계열에도 (마찰 보정 항을 통해)
    // 전파되지만, 각 시계열은 독립적으로 제 기준에서 판정한다.
    for series in &report.series {
        assert!(series.summary.average.is_finite());
        assert!(series.summary.relative_error_pct >= 0.0);
        assert!(series.summary.relative_rmse_pct.is_finite());
    }
}

#[test]
fn zero_flow_sample_aborts_pipeline() {
    let mut raw = lab_table();
    raw.flow_rate[3] = 0.0;
    let constants = PhysicalConstants::default();
    let err = pipeline::analyze(&raw, &constants, OutlierPolicy::Iqr).unwrap_err();
    assert!(matches!(err, PipelineError::Hydraulics(_)));
}

#[test]
fn both_policies_share_the_same_contract() {
    let raw = lab_table();
    let constants = PhysicalConstants::default();
    // 정책 교체가 호출부 변경 없이 이루어지는지와 불변식 유지 여부만 본다.
    for policy in [OutlierPolicy::Iqr, OutlierPolicy::ThreeSigma] {
        let report = pipeline::analyze(&raw, &constants, policy).expect("analyze");
        for series in &report.series {
            assert_eq!(series.values.len(), series.indices.len());
            assert!(is_subsequence(&series.indices, &raw.index));
        }
    }
}

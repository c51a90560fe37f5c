use serde::{Deserialize, Serialize};

/// 통계적 이상치 제거 정책.
///
/// 두 정책은 같은 계약을 공유하므로 호출부 수정 없이 맞바꿀 수 있다.
/// 운영 기본값은 `Iqr`이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlierPolicy {
    /// 사분위수 범위 기반. [Q1 − 1.5·IQR, Q3 + 1.5·IQR] 밖을 제거한다.
    Iqr,
    /// 평균 ± 3σ 기반. σ는 모표준편차이다.
    ThreeSigma,
}

impl OutlierPolicy {
    /// 값 시계열과 평행한 샘플 번호 시계열을 받아 경계 안의 쌍만 남긴다.
    ///
    /// i번째 값이 제거되면 i번째 번호도 함께 제거되어 두 벡터는 항상 동기화되며,
    /// 남은 번호열은 원본 순서를 보존하는 부분 수열이다.
    pub fn apply(&self, values: &[f64], indices: &[u32]) -> (Vec<f64>, Vec<u32>) {
        debug_assert_eq!(values.len(), indices.len());
        if values.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let (lower, upper) = match self {
            OutlierPolicy::Iqr => iqr_bounds(values),
            OutlierPolicy::ThreeSigma => three_sigma_bounds(values),
        };

        let mut kept_values = Vec::with_capacity(values.len());
        let mut kept_indices = Vec::with_capacity(indices.len());
        for (&value, &index) in values.iter().zip(indices) {
            if value >= lower && value <= upper {
                kept_values.push(value);
                kept_indices.push(index);
            }
        }
        (kept_values, kept_indices)
    }
}

fn iqr_bounds(values: &[f64]) -> (f64, f64) {
    let q1 = percentile(values, 25.0);
    let q3 = percentile(values, 75.0);
    let iqr = q3 - q1;
    (q1 - 1.5 * iqr, q3 + 1.5 * iqr)
}

fn three_sigma_bounds(values: &[f64]) -> (f64, f64) {
    let mean = mean(values);
    let sigma = population_std(values, mean);
    (mean - 3.0 * sigma, mean + 3.0 * sigma)
}

/// 순서통계량 사이를 선형 보간하는 백분위수. `p`는 0..=100.
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (rank - lower as f64) * (sorted[upper] - sorted[lower])
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|&v| (v - mean) * (v - mean))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

use super::constants::PhysicalConstants;
use super::loader::MeasurementTable;

/// 유도 물리량 계산 오류.
#[derive(Debug)]
pub enum HydraulicsError {
    /// 유속이 0이거나 유한하지 않은 샘플. 무류량 샘플은 즉시 중단한다.
    DegenerateFlowSpeed { index: u32 },
}

impl std::fmt::Display for HydraulicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HydraulicsError::DegenerateFlowSpeed { index } => {
                write!(f, "유속이 0이거나 비정상인 샘플입니다 (샘플 {index})")
            }
        }
    }
}

impl std::error::Error for HydraulicsError {}

/// 정규화된 테이블 전체에서 유도된 시계열 묶음. 모든 벡터는 원본 행 순서에 정렬된다.
#[derive(Debug, Clone)]
pub struct DerivedSeries {
    /// 유속 [m/s]
    pub flow_speed: Vec<f64>,
    /// 직관 구간에서 역산한 Darcy 마찰계수
    pub friction_factor: Vec<f64>,
    /// 글로브 밸브 부차 손실계수
    pub k_globe: Vec<f64>,
    /// 볼 밸브 부차 손실계수
    pub k_ball: Vec<f64>,
}

/// 원형 단면적 [m²].
pub fn inner_area(diameter_m: f64) -> f64 {
    std::f64::consts::PI * (diameter_m / 2.0) * (diameter_m / 2.0)
}

/// 측정 차압으로부터 Darcy 마찰계수를 역산한다.
/// Darcy-Weisbach 식을 f에 대해 정리한 꼴이다.
pub fn friction_factor(
    diameter_m: f64,
    dp_pa: f64,
    length_m: f64,
    density_kg_m3: f64,
    speed_m_s: f64,
) -> f64 {
    2.0 * diameter_m * dp_pa / (length_m * density_kg_m3 * speed_m_s * speed_m_s)
}

/// 밸브 구간의 부차 손실 수두 [m].
/// 전체 수두 손실에서 직관 마찰계수로 계산한 주손실 항을 뺀 나머지이다.
pub fn minor_head_loss(
    dp_pa: f64,
    specific_weight_n_m3: f64,
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    speed_m_s: f64,
    gravity_m_s2: f64,
) -> f64 {
    dp_pa / specific_weight_n_m3
        - friction_factor * (length_m / diameter_m) * (speed_m_s * speed_m_s / (2.0 * gravity_m_s2))
}

/// 부차 손실 수두를 무차원 손실계수 K로 바꾼다.
pub fn minor_loss_coefficient(head_m: f64, speed_m_s: f64, gravity_m_s2: f64) -> f64 {
    head_m * 2.0 * gravity_m_s2 / (speed_m_s * speed_m_s)
}

/// 정규화된 테이블 전체에 대해 유도 시계열을 계산한다.
///
/// 행마다 단면적 → 유속 → 마찰계수 → 부차 손실 수두 → 손실계수 순서로 계산한다.
/// 유속이 0이거나 유한하지 않으면 통계와 플롯에 NaN이 번지기 전에 중단한다.
pub fn derive_series(
    table: &MeasurementTable,
    constants: &PhysicalConstants,
) -> Result<DerivedSeries, HydraulicsError> {
    let n = table.len();
    let mut derived = DerivedSeries {
        flow_speed: Vec::with_capacity(n),
        friction_factor: Vec::with_capacity(n),
        k_globe: Vec::with_capacity(n),
        k_ball: Vec::with_capacity(n),
    };

    for i in 0..n {
        let diameter = table.diameter[i];
        let speed = table.flow_rate[i] / inner_area(diameter);
        if speed == 0.0 || !speed.is_finite() {
            return Err(HydraulicsError::DegenerateFlowSpeed {
                index: table.index[i],
            });
        }

        let f = friction_factor(
            diameter,
            table.dp_straight[i],
            constants.length_straight_m,
            constants.density_kg_m3,
            speed,
        );
        let head_globe = minor_head_loss(
            table.dp_globe[i],
            constants.specific_weight_n_m3,
            f,
            constants.length_globe_m,
            diameter,
            speed,
            constants.gravity_m_s2,
        );
        let head_ball = minor_head_loss(
            table.dp_ball[i],
            constants.specific_weight_n_m3,
            f,
            constants.length_ball_m,
            diameter,
            speed,
            constants.gravity_m_s2,
        );

        derived.flow_speed.push(speed);
        derived.friction_factor.push(f);
        derived
            .k_globe
            .push(minor_loss_coefficient(head_globe, speed, constants.gravity_m_s2));
        derived
            .k_ball
            .push(minor_loss_coefficient(head_ball, speed, constants.gravity_m_s2));
    }
    Ok(derived)
}

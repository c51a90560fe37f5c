use super::loader::MeasurementTable;
use crate::units::{
    convert_flow_rate, convert_length, convert_pressure, FlowRateUnit, LengthUnit, PressureUnit,
};

/// 원시 측정 테이블을 SI 단위 테이블로 변환한다.
///
/// 내경 inch→m, 유량 gal/min→m³/s, 차압 inH₂O→Pa. 샘플 번호는 그대로 둔다.
/// 순수 함수이며 실패 조건이 없다.
pub fn to_si(raw: &MeasurementTable) -> MeasurementTable {
    let pressures_to_pa = |column: &[f64]| -> Vec<f64> {
        column
            .iter()
            .map(|&p| convert_pressure(p, PressureUnit::InchOfWater, PressureUnit::Pascal))
            .collect()
    };

    MeasurementTable {
        index: raw.index.clone(),
        flow_rate: raw
            .flow_rate
            .iter()
            .map(|&q| {
                convert_flow_rate(
                    q,
                    FlowRateUnit::GallonPerMinute,
                    FlowRateUnit::CubicMeterPerSecond,
                )
            })
            .collect(),
        diameter: raw
            .diameter
            .iter()
            .map(|&d| convert_length(d, LengthUnit::Inch, LengthUnit::Meter))
            .collect(),
        dp_straight: pressures_to_pa(&raw.dp_straight),
        dp_globe: pressures_to_pa(&raw.dp_globe),
        dp_ball: pressures_to_pa(&raw.dp_ball),
    }
}

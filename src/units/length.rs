use serde::{Deserialize, Serialize};

/// 1 인치 = 0.0254 m (정의값).
pub const METER_PER_INCH: f64 = 0.0254;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Inch,
    Foot,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Inch => value * METER_PER_INCH,
        LengthUnit::Foot => value * METER_PER_INCH * 12.0,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Inch => value_m / METER_PER_INCH,
        LengthUnit::Foot => value_m / (METER_PER_INCH * 12.0),
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}

use serde::{Deserialize, Serialize};

/// 1 gal/min = 6.30902e-5 m³/s (미국 갤런).
pub const M3_PER_S_PER_GPM: f64 = 6.30902e-5;

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRateUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerMinute,
    GallonPerMinute,
}

fn to_m3_per_s(value: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value,
        FlowRateUnit::CubicMeterPerHour => value / 3600.0,
        FlowRateUnit::LiterPerMinute => value / 60_000.0,
        FlowRateUnit::GallonPerMinute => value * M3_PER_S_PER_GPM,
    }
}

fn from_m3_per_s(value_m3_s: f64, unit: FlowRateUnit) -> f64 {
    match unit {
        FlowRateUnit::CubicMeterPerSecond => value_m3_s,
        FlowRateUnit::CubicMeterPerHour => value_m3_s * 3600.0,
        FlowRateUnit::LiterPerMinute => value_m3_s * 60_000.0,
        FlowRateUnit::GallonPerMinute => value_m3_s / M3_PER_S_PER_GPM,
    }
}

/// 체적 유량을 다른 단위로 변환한다.
pub fn convert_flow_rate(value: f64, from: FlowRateUnit, to: FlowRateUnit) -> f64 {
    let m3_s = to_m3_per_s(value, from);
    from_m3_per_s(m3_s, to)
}

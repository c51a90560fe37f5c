//! 단위 변환 왕복 회귀 테스트.
use flowloop_analysis::units::{
    convert_flow_rate, convert_length, convert_pressure, FlowRateUnit, LengthUnit, PressureUnit,
};

#[test]
fn inch_to_meter_round_trip() {
    // 96 inch = 2.4384 m (정의값이므로 정확)
    let m = convert_length(96.0, LengthUnit::Inch, LengthUnit::Meter);
    assert!((m - 2.4384).abs() < 1e-12, "got {m}");
    let back = convert_length(m, LengthUnit::Meter, LengthUnit::Inch);
    assert!((back - 96.0).abs() < 1e-9);
}

#[test]
fn gallon_per_minute_round_trip() {
    let m3_s = convert_flow_rate(
        10.0,
        FlowRateUnit::GallonPerMinute,
        FlowRateUnit::CubicMeterPerSecond,
    );
    assert!((m3_s - 6.30902e-4).abs() < 1e-12, "got {m3_s}");
    let back = convert_flow_rate(
        m3_s,
        FlowRateUnit::CubicMeterPerSecond,
        FlowRateUnit::GallonPerMinute,
    );
    assert!((back - 10.0).abs() < 1e-9);
}

#[test]
fn inch_of_water_round_trip() {
    let pa = convert_pressure(5.0, PressureUnit::InchOfWater, PressureUnit::Pascal);
    assert!((pa - 1245.44455).abs() < 1e-9, "got {pa}");
    let back = convert_pressure(pa, PressureUnit::Pascal, PressureUnit::InchOfWater);
    assert!((back - 5.0).abs() < 1e-9);
}

#[test]
fn adjacent_lab_units() {
    // 60 L/min = 1 L/s = 0.001 m³/s
    let m3_s = convert_flow_rate(
        60.0,
        FlowRateUnit::LiterPerMinute,
        FlowRateUnit::CubicMeterPerSecond,
    );
    assert!((m3_s - 0.001).abs() < 1e-12);

    let pa = convert_pressure(1.0, PressureUnit::Psi, PressureUnit::Pascal);
    assert!((pa - 6894.757).abs() < 1e-6);

    let mm = convert_length(1.0, LengthUnit::Foot, LengthUnit::Millimeter);
    assert!((mm - 304.8).abs() < 1e-9);
}

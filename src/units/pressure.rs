use serde::{Deserialize, Serialize};

/// 1 inH₂O = 249.08891 Pa (4 °C 물기둥 기준).
pub const PA_PER_INCH_OF_WATER: f64 = 249.08891;

const PA_PER_PSI: f64 = 6894.757;
const PA_PER_BAR: f64 = 100_000.0;

/// 차압 단위. 내부 기준은 파스칼이다.
///
/// 계측값이 구간 전후의 차압이므로 게이지/절대 구분은 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
    Psi,
    InchOfWater,
}

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Psi => value * PA_PER_PSI,
        PressureUnit::InchOfWater => value * PA_PER_INCH_OF_WATER,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
        PressureUnit::InchOfWater => value_pa / PA_PER_INCH_OF_WATER,
    }
}

/// 차압을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}

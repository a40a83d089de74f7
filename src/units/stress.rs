use serde::{Deserialize, Serialize};

/// 응력(유효 수직응력) 단위. 내부 기준은 항상 kPa이다.
/// 모든 단위는 kPa에 대한 배율 하나로 정의되는 선형 변환이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    KiloPascal,
    KnPerM2,
    MegaPascal,
    Pascal,
    Bar,
    KgfPerCm2,
    Psi,
    Psf,
    Ksf,
    Tsf,
}

const KGF_CM2_KPA: f64 = 98.0665;
const PSI_KPA: f64 = 6.894757293168361;
const PSF_KPA: f64 = 0.04788025898033472;
const KSF_KPA: f64 = 47.88025898033472;
const TSF_KPA: f64 = 95.76051796067168;

impl StressUnit {
    /// 내부 기준 단위(kPa).
    pub const CANONICAL: StressUnit = StressUnit::KiloPascal;

    /// 메뉴/설정에서 열거 가능한 전체 단위 목록.
    pub const ALL: [StressUnit; 10] = [
        StressUnit::KiloPascal,
        StressUnit::KnPerM2,
        StressUnit::MegaPascal,
        StressUnit::Pascal,
        StressUnit::Bar,
        StressUnit::KgfPerCm2,
        StressUnit::Psi,
        StressUnit::Psf,
        StressUnit::Ksf,
        StressUnit::Tsf,
    ];

    /// 1 단위가 몇 kPa인지 반환한다. kN/m²는 kPa와 동치(배율 1)지만
    /// 표기만 다른 별도 단위로 취급한다.
    pub fn factor_kpa(self) -> f64 {
        match self {
            StressUnit::KiloPascal => 1.0,
            StressUnit::KnPerM2 => 1.0,
            StressUnit::MegaPascal => 1000.0,
            StressUnit::Pascal => 0.001,
            StressUnit::Bar => 100.0,
            StressUnit::KgfPerCm2 => KGF_CM2_KPA,
            StressUnit::Psi => PSI_KPA,
            StressUnit::Psf => PSF_KPA,
            StressUnit::Ksf => KSF_KPA,
            StressUnit::Tsf => TSF_KPA,
        }
    }

    /// 라벨/범례에 쓰는 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            StressUnit::KiloPascal => "kPa",
            StressUnit::KnPerM2 => "kN/m²",
            StressUnit::MegaPascal => "MPa",
            StressUnit::Pascal => "Pa",
            StressUnit::Bar => "bar",
            StressUnit::KgfPerCm2 => "kgf/cm²",
            StressUnit::Psi => "psi",
            StressUnit::Psf => "psf",
            StressUnit::Ksf => "ksf",
            StressUnit::Tsf => "tsf",
        }
    }
}

/// 주어진 응력 값을 kPa로 변환한다.
pub fn to_kpa(value: f64, unit: StressUnit) -> f64 {
    value * unit.factor_kpa()
}

/// kPa 값을 원하는 단위로 변환한다.
pub fn from_kpa(value_kpa: f64, unit: StressUnit) -> f64 {
    value_kpa / unit.factor_kpa()
}

/// 응력을 원하는 단위로 변환한다.
pub fn convert_stress(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    from_kpa(to_kpa(value, from), to)
}

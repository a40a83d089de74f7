use crate::units::{to_kpa, StressUnit};

/// 단위 변환/정규화 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 계열 안에 유한하지 않은 값이 존재 (0 기반 인덱스)
    NonFinite { index: usize },
    /// 스칼라 입력이 유한하지 않음
    NonFiniteScalar(f64),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::NonFinite { index } => {
                write!(f, "유한하지 않은 응력 값 (행 {index})")
            }
            ConversionError::NonFiniteScalar(v) => {
                write!(f, "유한하지 않은 입력 값: {v}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한다.
///
/// CLI 플래그와 설정 파일처럼 단위가 문자열로 들어오는 경로에서만 쓰인다.
/// 내부 호출자는 항상 enum 값을 들고 다니므로 `UnknownUnit`은 방어용이다.
pub fn parse_stress_unit(s: &str) -> Result<StressUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kpa" | "kilopascal" => Ok(StressUnit::KiloPascal),
        "kn/m2" | "kn/m^2" | "kn/m²" => Ok(StressUnit::KnPerM2),
        "mpa" | "megapascal" => Ok(StressUnit::MegaPascal),
        "pa" | "pascal" => Ok(StressUnit::Pascal),
        "bar" => Ok(StressUnit::Bar),
        "kg/cm2" | "kgf/cm2" | "kgf/cm²" => Ok(StressUnit::KgfPerCm2),
        "psi" => Ok(StressUnit::Psi),
        "psf" => Ok(StressUnit::Psf),
        "ksf" => Ok(StressUnit::Ksf),
        "tsf" => Ok(StressUnit::Tsf),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 문자열 단위명 기반 응력 변환. 단위 변환기 메뉴에서 사용한다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, ConversionError> {
    let from = parse_stress_unit(from_unit_str)?;
    let to = parse_stress_unit(to_unit_str)?;
    Ok(crate::units::convert_stress(value, from, to))
}

/// 응력 계열을 kPa로 일괄 정규화한다. 순서와 길이는 그대로 유지되며,
/// 유한하지 않은 원소가 있으면 해당 인덱스와 함께 실패한다.
pub fn normalize_series(values: &[f64], unit: StressUnit) -> Result<Vec<f64>, ConversionError> {
    let mut out = Vec::with_capacity(values.len());
    for (index, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(ConversionError::NonFinite { index });
        }
        out.push(to_kpa(v, unit));
    }
    Ok(out)
}

/// 스칼라 응력 값을 kPa로 정규화한다.
pub fn normalize_scalar(value: f64, unit: StressUnit) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteScalar(value));
    }
    Ok(to_kpa(value, unit))
}

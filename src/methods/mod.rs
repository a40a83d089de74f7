//! 선행압밀압력 산정법 모음. 각 산정법은 `SigmaPModel` 경계 뒤에서
//! 전체 계산을 수행하고 작도 그림을 돌려준다.

pub mod bilog;
pub mod boone;
pub mod casagrande;
pub mod energy;
pub mod fit;
pub mod pacheco_silva;

pub use bilog::Bilog;
pub use boone::Boone;
pub use casagrande::Casagrande;
pub use energy::{BeckerEtAl, WangAndFrost};
pub use pacheco_silva::PachecoSilva;

use crate::data::OedometerData;
use crate::figure::{Axes, Figure, Trace, TraceKind};

/// 산정 계산 중 발생 가능한 오류.
#[derive(Debug)]
pub enum MethodError {
    /// 데이터 점이 부족함
    TooFewPoints { needed: usize, got: usize },
    /// log 축에 올릴 수 없는 0 이하 응력 (0 기반 행)
    NonPositiveStress { row: usize },
    /// 현장 유효 수직응력이 필요한 산정법인데 0 이하
    MissingInSitu,
    /// bilog 계열의 잘못된 옵션 (1/2/3만 허용)
    InvalidOption(u8),
    /// 적합/작도 실패
    FitFailed(&'static str),
}

impl std::fmt::Display for MethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodError::TooFewPoints { needed, got } => {
                write!(f, "데이터 점이 부족합니다: 최소 {needed}점 필요, {got}점 입력")
            }
            MethodError::NonPositiveStress { row } => {
                write!(f, "0 이하의 응력 값은 log 축에 올릴 수 없습니다 (행 {row})")
            }
            MethodError::MissingInSitu => {
                write!(f, "이 산정법은 0보다 큰 현장 유효 수직응력이 필요합니다")
            }
            MethodError::InvalidOption(opt) => {
                write!(f, "bilog 옵션은 1/2/3만 허용됩니다: {opt}")
            }
            MethodError::FitFailed(msg) => write!(f, "적합 실패: {msg}"),
        }
    }
}

impl std::error::Error for MethodError {}

/// 산정법 공통 계약. 호출할 때마다 전체 계산을 처음부터 수행하며,
/// 결과 스칼라는 내부 기준 단위(kPa)로 보관한다.
pub trait SigmaPModel {
    /// σ'p 산정을 수행하고 작도 결과 그림을 반환한다.
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError>;

    /// 직전 계산에서 산정된 σ'p(kPa). 산정값이 없으면 None.
    fn sigma_p_kpa(&self) -> Option<f64>;
}

/// 응력 열을 log10으로 옮긴다. 0 이하 값이 있으면 실패한다.
pub(crate) fn log10_stress(data: &OedometerData) -> Result<Vec<f64>, MethodError> {
    let mut out = Vec::with_capacity(data.len());
    for (row, &s) in data.stress_kpa().iter().enumerate() {
        if s <= 0.0 {
            return Err(MethodError::NonPositiveStress { row });
        }
        out.push(s.log10());
    }
    Ok(out)
}

/// 실험 곡선(간극비 - log 응력)을 트레이스 0으로 갖는 작도용 축.
pub(crate) fn lab_curve_axes(data: &OedometerData) -> Axes {
    let mut axes = Axes::stress_semilog("Effective vertical stress [kPa]", "Void ratio");
    axes.traces.push(Trace::new(
        data.stress_kpa().to_vec(),
        data.void_ratio().to_vec(),
        TraceKind::LineMarkers,
        0,
    ));
    axes
}

/// 처녀압축선 적합에 쓰는 꼬리 구간 길이.
pub(crate) fn tail_len(n: usize) -> usize {
    (n / 3).max(3).min(n)
}

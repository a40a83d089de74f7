use serde::{Deserialize, Serialize};

use crate::data::OedometerData;
use crate::figure::Figure;
use crate::methods::{
    BeckerEtAl, Bilog, Boone, Casagrande, MethodError, PachecoSilva, SigmaPModel, WangAndFrost,
};

/// 사용 가능한 σ'p 산정법. bilog 계열은 옵션 정수로 세 가지가 갈린다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMethod {
    Casagrande,
    PachecoSilva,
    Boone,
    Butterfield,
    Oikawa,
    Onitsuka,
    WangAndFrost,
    BeckerEtAl,
}

impl AnalysisMethod {
    /// 메뉴/설정에서 열거 가능한 전체 산정법 목록.
    pub const ALL: [AnalysisMethod; 8] = [
        AnalysisMethod::Casagrande,
        AnalysisMethod::PachecoSilva,
        AnalysisMethod::Boone,
        AnalysisMethod::Butterfield,
        AnalysisMethod::Oikawa,
        AnalysisMethod::Onitsuka,
        AnalysisMethod::WangAndFrost,
        AnalysisMethod::BeckerEtAl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisMethod::Casagrande => "Casagrande",
            AnalysisMethod::PachecoSilva => "Pacheco Silva",
            AnalysisMethod::Boone => "Boone",
            AnalysisMethod::Butterfield => "Butterfield (bilog)",
            AnalysisMethod::Oikawa => "Oikawa (bilog)",
            AnalysisMethod::Onitsuka => "Onitsuka et al. (bilog)",
            AnalysisMethod::WangAndFrost => "Wang & Frost (energy)",
            AnalysisMethod::BeckerEtAl => "Becker et al. (energy)",
        }
    }

    /// CLI 플래그용 이름을 enum으로 바꾼다.
    pub fn parse(s: &str) -> Option<AnalysisMethod> {
        match s.trim().to_lowercase().as_str() {
            "casagrande" => Some(AnalysisMethod::Casagrande),
            "pacheco-silva" | "pachecosilva" | "pacheco" => Some(AnalysisMethod::PachecoSilva),
            "boone" => Some(AnalysisMethod::Boone),
            "butterfield" => Some(AnalysisMethod::Butterfield),
            "oikawa" => Some(AnalysisMethod::Oikawa),
            "onitsuka" => Some(AnalysisMethod::Onitsuka),
            "wang-frost" | "wangandfrost" | "wang" => Some(AnalysisMethod::WangAndFrost),
            "becker" | "beckeretal" => Some(AnalysisMethod::BeckerEtAl),
            _ => None,
        }
    }
}

/// 산정 1회의 결과: 작도 그림과, 있을 경우 kPa 기준 σ'p.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutcome {
    pub figure: Figure,
    pub sigma_p_kpa: Option<f64>,
}

/// 선택된 산정법을 해당 모델 생성자와 호출 인자로 매핑해 실행한다.
/// 호출마다 모델을 새로 만들어 전체 계산을 처음부터 수행한다. 캐시 없음.
pub fn run(method: AnalysisMethod, data: &OedometerData) -> Result<MethodOutcome, MethodError> {
    let mut model: Box<dyn SigmaPModel> = match method {
        AnalysisMethod::Casagrande => Box::new(Casagrande::new(true)),
        AnalysisMethod::PachecoSilva => Box::new(PachecoSilva::new()),
        AnalysisMethod::Boone => Box::new(Boone::new()),
        AnalysisMethod::Butterfield => Box::new(Bilog::new(1)),
        AnalysisMethod::Oikawa => Box::new(Bilog::new(2)),
        AnalysisMethod::Onitsuka => Box::new(Bilog::new(3)),
        AnalysisMethod::WangAndFrost => Box::new(WangAndFrost::new()),
        AnalysisMethod::BeckerEtAl => Box::new(BeckerEtAl::new()),
    };
    let figure = model.get_sigma_p(data)?;
    Ok(MethodOutcome {
        figure,
        sigma_p_kpa: model.sigma_p_kpa(),
    })
}

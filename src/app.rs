use std::path::PathBuf;

use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::data::{self, TableError};
use crate::dispatch::{self, AnalysisMethod};
use crate::display;
use crate::i18n::{self, Translator};
use crate::methods::MethodError;
use crate::quantity::Measurement;
use crate::render::{self, RenderError};
use crate::sanitize;
use crate::style::PlotStyle;
use crate::ui_cli::{self, MenuChoice};
use crate::units::{from_kpa, StressUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환/정규화 오류
    Conversion(ConversionError),
    /// 입력 표 오류
    Table(TableError),
    /// σ'p 산정 오류
    Method(MethodError),
    /// 그림 렌더링 오류
    Render(RenderError),
    /// 알 수 없는 산정법 이름
    UnknownMethod(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Table(e) => write!(f, "입력 표 오류: {e}"),
            AppError::Method(e) => write!(f, "산정 오류: {e}"),
            AppError::Render(e) => write!(f, "렌더링 오류: {e}"),
            AppError::UnknownMethod(name) => write!(f, "알 수 없는 산정법: {name}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<TableError> for AppError {
    fn from(value: TableError) -> Self {
        AppError::Table(value)
    }
}

impl From<MethodError> for AppError {
    fn from(value: MethodError) -> Self {
        AppError::Method(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        AppError::Render(value)
    }
}

/// 한 번의 산정 요청. 단위 선택은 모두 레지스트리 열거에서만 이루어지며,
/// 표시 단위는 계산에 아무 영향을 주지 않는다.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub csv_path: PathBuf,
    pub csv_unit: StressUnit,
    pub sigma_v: f64,
    pub sigma_v_unit: StressUnit,
    pub display_unit: StressUnit,
    pub method: AnalysisMethod,
    pub curve_png: PathBuf,
    pub method_png: PathBuf,
}

/// 산정 요청 처리 결과.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// 내부 기준 단위(kPa)의 σ'p
    pub sigma_p_kpa: Option<f64>,
    /// 표시 단위로 환산한 σ'p
    pub sigma_p_display: Option<f64>,
}

/// 정규화 → 산정 → 표시 재작성 → 렌더링의 전체 파이프라인을 한 번 수행한다.
/// 호출마다 데이터/그림 객체를 새로 만들며 어떤 상태도 공유하지 않는다.
pub fn run_analysis(req: &AnalysisRequest, style: &PlotStyle) -> Result<AnalysisOutcome, AppError> {
    let table = data::load_csv(&req.csv_path)?;
    // 응력 열과 현장 응력만 kPa로 정규화한다. 축변형률/간극비는 그대로.
    let stress_kpa = conversion::normalize_series(&table.stress, req.csv_unit)?;
    let sigma_v = Measurement::new(req.sigma_v, req.sigma_v_unit)?;
    let data = data::OedometerData::new(stress_kpa, table.strain, table.void_ratio, sigma_v.value_kpa);

    let mut curve = data.plot();
    sanitize::sanitize_figure(&mut curve);
    display::apply(&mut curve, req.display_unit);
    render::save_png(&curve, &req.curve_png, style)?;

    let outcome = dispatch::run(req.method, &data)?;
    let mut figure = outcome.figure;
    sanitize::sanitize_figure(&mut figure);
    display::apply(&mut figure, req.display_unit);
    render::save_png(&figure, &req.method_png, style)?;

    Ok(AnalysisOutcome {
        sigma_p_kpa: outcome.sigma_p_kpa,
        sigma_p_display: outcome
            .sigma_p_kpa
            .map(|v| from_kpa(v, req.display_unit)),
    })
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Analyze => {
                // 개별 요청의 실패는 루프를 끝내지 않고 전체 내용을 보여준다.
                if let Err(err) = ui_cli::handle_analysis(tr, config) {
                    eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
                }
            }
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

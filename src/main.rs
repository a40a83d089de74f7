use std::path::PathBuf;

use clap::Parser;

use sigmap_toolbox::app::{self, AnalysisRequest, AppError};
use sigmap_toolbox::config;
use sigmap_toolbox::conversion;
use sigmap_toolbox::dispatch::AnalysisMethod;
use sigmap_toolbox::display;
use sigmap_toolbox::i18n::{self, keys, Translator};
use sigmap_toolbox::style::PlotStyle;
use sigmap_toolbox::units::StressUnit;

/// 압밀시험 CSV로부터 선행압밀압력 σ'p를 산정하는 도구.
#[derive(Parser, Debug)]
#[command(name = "sigmap_toolbox")]
struct Cli {
    /// 압밀시험 CSV 경로. 지정하면 대화형 메뉴 없이 일괄 실행한다.
    csv: Option<PathBuf>,
    /// 산정법: casagrande, pacheco-silva, boone, butterfield, oikawa,
    /// onitsuka, wang-frost, becker
    #[arg(long)]
    method: Option<String>,
    /// CSV 응력 열의 단위 (기본: 설정값)
    #[arg(long)]
    csv_unit: Option<String>,
    /// 현장 유효 수직응력 σ'v0 (0 이상)
    #[arg(long, default_value_t = 0.0)]
    sigma_v: f64,
    /// σ'v0의 단위 (기본: 설정값)
    #[arg(long)]
    sigma_v_unit: Option<String>,
    /// 결과 표시 단위 (기본: 설정값)
    #[arg(long)]
    display_unit: Option<String>,
    /// 그림 저장 폴더 (기본: 현재 폴더)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// UI 언어 (ko/en/auto)
    #[arg(long)]
    lang: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 일괄 실행 또는 대화형
/// 메뉴를 시작한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(mut cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new(&lang);
    match cli.csv.take() {
        Some(csv_path) => run_batch(csv_path, cli, &cfg, &tr)?,
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}

/// 플래그만으로 한 번의 산정을 수행하는 일괄 실행 모드.
fn run_batch(
    csv_path: PathBuf,
    cli: Cli,
    cfg: &config::Config,
    tr: &Translator,
) -> Result<(), AppError> {
    let method_name = cli
        .method
        .ok_or_else(|| AppError::UnknownMethod("(--method 미지정)".to_string()))?;
    let method = AnalysisMethod::parse(&method_name)
        .ok_or(AppError::UnknownMethod(method_name))?;
    let csv_unit = parse_unit_or(cli.csv_unit.as_deref(), cfg.csv_unit)?;
    let sigma_v_unit = parse_unit_or(cli.sigma_v_unit.as_deref(), cfg.in_situ_unit)?;
    let display_unit = parse_unit_or(cli.display_unit.as_deref(), cfg.display_unit)?;
    let out_dir = cli.out_dir.unwrap_or_else(|| PathBuf::from("."));
    let request = AnalysisRequest {
        csv_path,
        csv_unit,
        sigma_v: cli.sigma_v,
        sigma_v_unit,
        display_unit,
        method,
        curve_png: out_dir.join("compression_curve.png"),
        method_png: out_dir.join("sigma_p.png"),
    };
    let style = PlotStyle::default();
    let outcome = app::run_analysis(&request, &style)?;
    println!(
        "{} {}",
        tr.t(keys::RESULT_CURVE_SAVED),
        request.curve_png.display()
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_METHOD_SAVED),
        request.method_png.display()
    );
    match outcome.sigma_p_display {
        Some(value) => println!(
            "{} {} {}",
            tr.t(keys::RESULT_SIGMA_P),
            display::format_tiered(value),
            display_unit.symbol()
        ),
        None => println!("{}", tr.t(keys::RESULT_NO_SIGMA_P)),
    }
    Ok(())
}

fn parse_unit_or(arg: Option<&str>, default: StressUnit) -> Result<StressUnit, AppError> {
    match arg {
        Some(s) => Ok(conversion::parse_stress_unit(s)?),
        None => Ok(default),
    }
}

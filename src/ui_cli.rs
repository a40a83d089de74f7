use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::{self, AnalysisRequest, AppError};
use crate::config::Config;
use crate::conversion;
use crate::dispatch::AnalysisMethod;
use crate::display;
use crate::i18n::{keys, Translator};
use crate::style::PlotStyle;
use crate::units::StressUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analyze,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ANALYZE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Analyze),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// σ'p 산정 메뉴를 처리한다. 설정은 계산 전에 모두 수집한다.
pub fn handle_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ANALYZE_HEADING));
    let csv_path = PathBuf::from(read_line(tr.t(keys::PROMPT_CSV_PATH))?.trim());
    let csv_unit = read_unit(tr, tr.t(keys::PROMPT_CSV_UNIT), cfg.csv_unit)?;
    let sigma_v = loop {
        let v = read_f64(tr, tr.t(keys::PROMPT_SIGMA_V))?;
        if v >= 0.0 {
            break v;
        }
        println!("{}", tr.t(keys::PROMPT_SIGMA_V_NONNEG));
    };
    let sigma_v_unit = read_unit(tr, tr.t(keys::PROMPT_SIGMA_V_UNIT), cfg.in_situ_unit)?;
    let method = read_method(tr)?;
    let display_unit = read_unit(tr, tr.t(keys::PROMPT_DISPLAY_UNIT), cfg.display_unit)?;
    let out_dir = {
        let s = read_line(tr.t(keys::PROMPT_OUTPUT_DIR))?;
        let t = s.trim();
        if t.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(t)
        }
    };

    let request = AnalysisRequest {
        csv_path,
        csv_unit,
        sigma_v,
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

/// 응력 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO))?;
    let result = conversion::convert(value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.csv_unit.symbol(),
        cfg.in_situ_unit.symbol(),
        cfg.display_unit.symbol()
    );
    cfg.csv_unit = read_unit(tr, tr.t(keys::SETTINGS_PROMPT_CSV_UNIT), cfg.csv_unit)?;
    cfg.in_situ_unit = read_unit(tr, tr.t(keys::SETTINGS_PROMPT_IN_SITU_UNIT), cfg.in_situ_unit)?;
    cfg.display_unit = read_unit(tr, tr.t(keys::SETTINGS_PROMPT_DISPLAY_UNIT), cfg.display_unit)?;
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANG))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 번호 목록으로 단위를 고른다. 빈 입력은 기본값을 유지한다.
fn read_unit(tr: &Translator, heading: &str, default: StressUnit) -> Result<StressUnit, AppError> {
    println!("{heading} [{}]:", default.symbol());
    for (i, unit) in StressUnit::ALL.iter().enumerate() {
        print!("  {}={}", i + 1, unit.symbol());
    }
    println!();
    loop {
        let sel = read_line(tr.t(keys::PROMPT_UNIT_SELECT))?;
        let t = sel.trim();
        if t.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = t.parse::<usize>() {
            if (1..=StressUnit::ALL.len()).contains(&n) {
                return Ok(StressUnit::ALL[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 번호 목록으로 산정법을 고른다.
fn read_method(tr: &Translator) -> Result<AnalysisMethod, AppError> {
    println!("{}:", tr.t(keys::PROMPT_METHOD));
    for (i, method) in AnalysisMethod::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, method.label());
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_UNIT_SELECT))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if (1..=AnalysisMethod::ALL.len()).contains(&n) {
                return Ok(AnalysisMethod::ALL[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

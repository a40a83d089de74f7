use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ANALYZE: &str = "main_menu.analyze";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";

    pub const ANALYZE_HEADING: &str = "analyze.heading";
    pub const PROMPT_CSV_PATH: &str = "prompt.csv_path";
    pub const PROMPT_CSV_UNIT: &str = "prompt.csv_unit";
    pub const PROMPT_SIGMA_V: &str = "prompt.sigma_v";
    pub const PROMPT_SIGMA_V_UNIT: &str = "prompt.sigma_v_unit";
    pub const PROMPT_SIGMA_V_NONNEG: &str = "prompt.sigma_v_nonneg";
    pub const PROMPT_METHOD: &str = "prompt.method";
    pub const PROMPT_DISPLAY_UNIT: &str = "prompt.display_unit";
    pub const PROMPT_OUTPUT_DIR: &str = "prompt.output_dir";
    pub const PROMPT_UNIT_SELECT: &str = "prompt.unit_select";
    pub const RESULT_CURVE_SAVED: &str = "result.curve_saved";
    pub const RESULT_METHOD_SAVED: &str = "result.method_saved";
    pub const RESULT_SIGMA_P: &str = "result.sigma_p";
    pub const RESULT_NO_SIGMA_P: &str = "result.no_sigma_p";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM: &str = "unit_conversion.prompt_from";
    pub const UNIT_CONVERSION_PROMPT_TO: &str = "unit_conversion.prompt_to";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_PROMPT_CSV_UNIT: &str = "settings.prompt_csv_unit";
    pub const SETTINGS_PROMPT_IN_SITU_UNIT: &str = "settings.prompt_in_situ_unit";
    pub const SETTINGS_PROMPT_DISPLAY_UNIT: &str = "settings.prompt_display_unit";
    pub const SETTINGS_PROMPT_LANG: &str = "settings.prompt_lang";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn detect_system_language() -> Option<String> {
    get_locale().and_then(|l| normalize_lang(&l))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        MAIN_MENU_TITLE => "\n=== Preconsolidation Pressure Toolbox ===",
        MAIN_MENU_ANALYZE => "1) σ'p 산정 실행",
        MAIN_MENU_UNIT_CONVERSION => "2) 응력 단위 변환기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        ANALYZE_HEADING => "\n-- σ'p 산정 --",
        PROMPT_CSV_PATH => "압밀시험 CSV 경로: ",
        PROMPT_CSV_UNIT => "CSV 응력 열의 단위",
        PROMPT_SIGMA_V => "현장 유효 수직응력 σ'v0 값 (0 이상): ",
        PROMPT_SIGMA_V_UNIT => "σ'v0 단위",
        PROMPT_SIGMA_V_NONNEG => "0 이상의 값을 입력하세요.",
        PROMPT_METHOD => "산정법 선택",
        PROMPT_DISPLAY_UNIT => "결과 표시 단위",
        PROMPT_OUTPUT_DIR => "그림 저장 폴더 (엔터 = 현재 폴더): ",
        PROMPT_UNIT_SELECT => "번호 선택: ",
        RESULT_CURVE_SAVED => "압축곡선 저장:",
        RESULT_METHOD_SAVED => "작도 결과 저장:",
        RESULT_SIGMA_P => "선행압밀압력 σ'p =",
        RESULT_NO_SIGMA_P => "이 산정법은 스칼라 결과를 제공하지 않습니다.",
        UNIT_CONVERSION_HEADING => "\n-- 응력 단위 변환 --",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM => "입력 단위(ex: kPa, psi, tsf): ",
        UNIT_CONVERSION_PROMPT_TO => "변환 단위(ex: MPa, bar, ksf): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본 단위 (CSV / σ'v0 / 표시):",
        SETTINGS_PROMPT_CSV_UNIT => "CSV 기본 단위",
        SETTINGS_PROMPT_IN_SITU_UNIT => "σ'v0 기본 단위",
        SETTINGS_PROMPT_DISPLAY_UNIT => "표시 기본 단위",
        SETTINGS_PROMPT_LANG => "언어 (ko/en/auto, 엔터 = 유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "error",
        APP_EXIT => "Exiting.",
        ERROR_INVALID_NUMBER => "Enter a number.",
        INVALID_SELECTION_RETRY => "Invalid input. Choose again.",
        MAIN_MENU_TITLE => "\n=== Preconsolidation Pressure Toolbox ===",
        MAIN_MENU_ANALYZE => "1) Run σ'p estimation",
        MAIN_MENU_UNIT_CONVERSION => "2) Stress unit converter",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        ANALYZE_HEADING => "\n-- σ'p estimation --",
        PROMPT_CSV_PATH => "Consolidation test CSV path: ",
        PROMPT_CSV_UNIT => "Unit of the CSV stress column",
        PROMPT_SIGMA_V => "In-situ effective vertical stress σ'v0 (>= 0): ",
        PROMPT_SIGMA_V_UNIT => "σ'v0 unit",
        PROMPT_SIGMA_V_NONNEG => "Enter a value >= 0.",
        PROMPT_METHOD => "Estimation method",
        PROMPT_DISPLAY_UNIT => "Display unit for results",
        PROMPT_OUTPUT_DIR => "Figure output folder (enter = current): ",
        PROMPT_UNIT_SELECT => "Select number: ",
        RESULT_CURVE_SAVED => "Compressibility curve saved:",
        RESULT_METHOD_SAVED => "Construction figure saved:",
        RESULT_SIGMA_P => "Preconsolidation pressure σ'p =",
        RESULT_NO_SIGMA_P => "This method does not expose a scalar result.",
        UNIT_CONVERSION_HEADING => "\n-- Stress unit conversion --",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM => "From unit (ex: kPa, psi, tsf): ",
        UNIT_CONVERSION_PROMPT_TO => "To unit (ex: MPa, bar, ksf): ",
        UNIT_CONVERSION_RESULT => "Converted:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current default units (CSV / σ'v0 / display):",
        SETTINGS_PROMPT_CSV_UNIT => "Default CSV unit",
        SETTINGS_PROMPT_IN_SITU_UNIT => "Default σ'v0 unit",
        SETTINGS_PROMPT_DISPLAY_UNIT => "Default display unit",
        SETTINGS_PROMPT_LANG => "Language (ko/en/auto, enter = keep): ",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}

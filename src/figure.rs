use crate::units::StressUnit;

/// 축 스케일.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}

/// 트레이스 종류. 렌더러가 선/마커 표현을 결정할 때 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// 실선 + 데이터점 마커
    LineMarkers,
    /// 실선
    Line,
    /// 파선 (작도 보조선)
    Dashed,
    /// 마커만
    Scatter,
}

/// 하나의 데이터 계열. 좌표는 항상 데이터 좌표(응력은 kPa)이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub kind: TraceKind,
    /// 스타일 팔레트 인덱스
    pub color: usize,
}

impl Trace {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, kind: TraceKind, color: usize) -> Self {
        Self {
            xs,
            ys,
            kind,
            color,
        }
    }
}

/// 범례 제목/항목처럼 강조 여부를 함께 들고 다니는 텍스트.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub bold: bool,
}

impl Text {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            bold: false,
        }
    }
}

/// 범례 항목. `trace`는 이 항목이 가리키는 트레이스 인덱스이다.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub text: Text,
    pub trace: usize,
}

/// 축에 붙는 범례: 제목 + 순서 있는 항목들.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: Option<Text>,
    pub entries: Vec<LegendEntry>,
}

/// 눈금 라벨 포맷. 계산 결과(수치 계열)는 건드리지 않고 라벨만 결정한다.
#[derive(Debug, Clone, PartialEq)]
pub enum TickFormat {
    /// 내부 기준 값 그대로
    Plain,
    /// 표시 단위 환산: 라벨 = format(v * factor)
    Scaled { factor: f64 },
    /// 라벨 없음
    Blank,
}

impl TickFormat {
    /// 눈금 값 하나를 라벨 문자열로 바꾼다. 0은 항상 "0"이다.
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => format_compact(value),
            TickFormat::Scaled { factor } => format_compact(value * factor),
            TickFormat::Blank => String::new(),
        }
    }
}

/// 유효숫자 기반의 짧은 눈금 표기. 말미의 0은 제거한다.
pub fn format_compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let rounded = round_sig(value, 4);
    let magnitude = rounded.abs();
    if magnitude >= 1e5 || magnitude < 1e-4 {
        return format!("{rounded:e}");
    }
    let order = magnitude.log10().floor() as i32;
    let decimals = (3 - order).max(0) as usize;
    let mut s = format!("{rounded:.decimals$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

fn round_sig(value: f64, sig: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let order = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(sig - 1 - order);
    (value * scale).round() / scale
}

/// 하나의 좌표축 영역. 범례/눈금 포맷/축 라벨과 x축이 현재 표현 중인
/// 단위를 함께 들고 다닌다.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub traces: Vec<Trace>,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: AxisScale,
    /// x축이 응력 축이면 현재 표현 단위. 응력 축이 아니면 None.
    pub x_unit: Option<StressUnit>,
    pub x_major: TickFormat,
    pub x_minor: TickFormat,
    pub legend: Option<Legend>,
}

impl Axes {
    /// 응력을 log 스케일 x축(kPa 기준)으로 갖는 빈 축.
    pub fn stress_semilog(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            traces: Vec::new(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_scale: AxisScale::Log10,
            x_unit: Some(StressUnit::CANONICAL),
            x_major: TickFormat::Plain,
            x_minor: TickFormat::Plain,
            legend: None,
        }
    }

    /// 응력을 선형 x축(kPa 기준)으로 갖는 빈 축.
    pub fn stress_linear(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_scale: AxisScale::Linear,
            ..Self::stress_semilog(x_label, y_label)
        }
    }
}

/// 렌더링 대상 그림. 축 0개 이상을 가진다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub axes: Vec<Axes>,
}

impl Figure {
    pub fn single(axes: Axes) -> Self {
        Self { axes: vec![axes] }
    }
}

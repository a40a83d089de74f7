//! 내부 기준 단위(kPa)로 만들어진 그림을 표시 단위로 바꿔 쓰는 단계.
//! 눈금 포맷/축 라벨/범례 문자열만 다시 쓰며, 수치 계열은 건드리지 않고
//! 어떤 재계산도 일으키지 않는다.

use crate::figure::{Figure, Text, TickFormat};
use crate::units::StressUnit;

/// 내부 기준 단위 기호. 범례/축 라벨 재작성은 이 토큰을 찾아 이루어진다.
const CANONICAL_SYMBOL: &str = "kPa";

/// 그림을 표시 단위로 다시 쓴다. 표시 단위가 내부 기준 단위면 항등
/// 변환이며 그림은 전혀 바뀌지 않는다.
pub fn apply(figure: &mut Figure, target: StressUnit) {
    if target == StressUnit::CANONICAL {
        return;
    }
    // kPa 값 v는 v * factor 로 표시된다.
    let factor = 1.0 / target.factor_kpa();
    for axes in &mut figure.axes {
        if axes.x_unit == Some(StressUnit::CANONICAL) {
            axes.x_major = TickFormat::Scaled { factor };
            // 보조 눈금 라벨은 지워서 어지럽지 않게 한다.
            axes.x_minor = TickFormat::Blank;
            axes.x_label = rewrite_axis_label(&axes.x_label, target);
            axes.x_unit = Some(target);
        }
        if let Some(legend) = &mut axes.legend {
            if let Some(title) = &mut legend.title {
                rewrite_text(title, target, factor);
            }
            for entry in &mut legend.entries {
                rewrite_text(&mut entry.text, target, factor);
            }
        }
    }
}

fn rewrite_text(text: &mut Text, target: StressUnit, factor: f64) {
    text.content = rewrite_legend_text(&text.content, target, factor);
}

fn rewrite_axis_label(label: &str, target: StressUnit) -> String {
    if label.contains(CANONICAL_SYMBOL) {
        label.replace(CANONICAL_SYMBOL, target.symbol())
    } else if !label.is_empty() {
        format!("{label} [{}]", target.symbol())
    } else {
        format!("Effective vertical stress [{}]", target.symbol())
    }
}

/// 범례 문자열 안에서 기준 단위 토큰을 찾아 표시 단위로 바꿔 쓴다.
///
/// - `숫자 [공백] kPa` 꼴이면 숫자를 환산해 단계별 정밀도로 다시 찍는다.
/// - `[kPa]` 꼴의 괄호 토큰은 괄호째 `[단위]`로 치환한다.
/// - 둘 다 아니면 그대로 둔다.
pub fn rewrite_legend_text(s: &str, target: StressUnit, factor: f64) -> String {
    let chars: Vec<char> = s.chars().collect();
    let token: Vec<char> = CANONICAL_SYMBOL.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut consumed = 0usize;
    let mut i = 0usize;
    while i < chars.len() {
        if i < consumed || !matches_at(&chars, i, &token) {
            i += 1;
            continue;
        }
        let mut tok_start = i;
        let mut tok_end = i + token.len();
        let mut bracketed = false;
        if i > 0 && chars[i - 1] == '[' && tok_end < chars.len() && chars[tok_end] == ']' {
            bracketed = true;
            tok_start = i - 1;
            tok_end += 1;
        } else if tok_end < chars.len() && chars[tok_end].is_alphanumeric() {
            // 다른 단어의 일부
            i += 1;
            continue;
        }
        if tok_start < consumed {
            i += 1;
            continue;
        }
        // 토큰 앞의 공백, 그 앞의 십진수(선택)를 찾는다.
        let mut ws_start = tok_start;
        while ws_start > consumed && chars[ws_start - 1].is_whitespace() {
            ws_start -= 1;
        }
        let mut num_start = ws_start;
        while num_start > consumed
            && (chars[num_start - 1].is_ascii_digit() || chars[num_start - 1] == '.')
        {
            num_start -= 1;
        }
        let num_text: String = chars[num_start..ws_start].iter().collect();
        let parsed = if num_text.chars().any(|c| c.is_ascii_digit()) {
            num_text.parse::<f64>().ok()
        } else {
            None
        };
        let new_token = if bracketed {
            format!("[{}]", target.symbol())
        } else {
            target.symbol().to_string()
        };
        match parsed {
            Some(value) => {
                out.extend(&chars[consumed..num_start]);
                out.push_str(&format_tiered(value * factor));
                // 숫자와 토큰 사이의 공백은 원문 그대로 유지한다.
                out.extend(&chars[ws_start..tok_start]);
                out.push_str(&new_token);
            }
            None if bracketed => {
                out.extend(&chars[consumed..tok_start]);
                out.push_str(&new_token);
            }
            None => {
                i += 1;
                continue;
            }
        }
        consumed = tok_end;
        i = tok_end;
    }
    out.extend(&chars[consumed..]);
    out
}

fn matches_at(chars: &[char], i: usize, token: &[char]) -> bool {
    chars.len() >= i + token.len() && chars[i..i + token.len()] == *token
}

/// 범례 수치의 단계별 정밀도:
/// 100 이상 → 소수점 없음, 10 이상 → 소수 1자리, 10 미만 → 유효숫자 3자리.
pub fn format_tiered(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 100.0 {
        format!("{value:.0}")
    } else if magnitude >= 10.0 {
        format!("{value:.1}")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        let order = magnitude.log10().floor() as i32;
        let decimals = (2 - order).clamp(0, 12) as usize;
        format!("{value:.decimals$}")
    }
}

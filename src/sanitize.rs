//! 범례 텍스트에 섞여 들어오는 수식 강조 매크로를 걷어내는 정리 단계.
//! 래스터라이저는 텍스트 마크업을 해석하지 않으므로, 렌더링 전에
//! 매크로를 벗기고 강조는 bold 플래그로 넘긴다.

use crate::figure::{Figure, Text};

/// 그림의 모든 축 범례(제목 + 항목)를 정리한다. 두 번 적용해도
/// 한 번 적용한 것과 같다.
pub fn sanitize_figure(figure: &mut Figure) {
    for axes in &mut figure.axes {
        if let Some(legend) = &mut axes.legend {
            if let Some(title) = &mut legend.title {
                sanitize_text(title);
            }
            for entry in &mut legend.entries {
                sanitize_text(&mut entry.text);
            }
        }
    }
}

/// 텍스트 하나를 정리한다. 내용이 바뀐 경우에만 bold로 표시한다.
/// 이미 정리된 텍스트는 내용도 플래그도 바뀌지 않는다.
pub fn sanitize_text(text: &mut Text) {
    let cleaned = strip_markup(&text.content);
    if cleaned != text.content {
        text.content = cleaned;
        text.bold = true;
    }
}

/// `\bf{...}`/`\mathbf{...}` 래퍼를 벗기고 인자만 남긴다.
/// 간격 이스케이프(`\ `, `\,`, `\;`)는 각각 공백 하나가 된다.
pub fn strip_markup(input: &str) -> String {
    let mut s = input.to_string();
    // 인자 내부에 다시 매크로가 올 수 있으므로 고정점까지 벗긴다.
    while let Some(next) = unwrap_first_macro(&s) {
        s = next;
    }
    s.replace("\\,", " ").replace("\\;", " ").replace("\\ ", " ")
}

fn unwrap_first_macro(s: &str) -> Option<String> {
    const MACROS: [&str; 2] = ["\\mathbf{", "\\bf{"];
    let (start, mac) = MACROS
        .iter()
        .filter_map(|m| s.find(m).map(|i| (i, *m)))
        .min_by_key(|(i, _)| *i)?;
    let body_start = start + mac.len();
    let mut depth = 1usize;
    for (offset, ch) in s[body_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = body_start + offset;
                    let mut out = String::with_capacity(s.len());
                    out.push_str(&s[..start]);
                    out.push_str(&s[body_start..end]);
                    out.push_str(&s[end + 1..]);
                    return Some(out);
                }
            }
            _ => {}
        }
    }
    // 닫는 중괄호가 없으면 건드리지 않는다.
    None
}

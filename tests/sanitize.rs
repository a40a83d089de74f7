//! 범례 마크업 정리 회귀 테스트.
use sigmap_toolbox::figure::Text;
use sigmap_toolbox::sanitize::{sanitize_text, strip_markup};

#[test]
fn bold_macro_is_unwrapped() {
    assert_eq!(strip_markup("\\bf{Casagrande method}"), "Casagrande method");
    assert_eq!(strip_markup("\\mathbf{abc}"), "abc");
}

#[test]
fn spacing_escapes_collapse_to_single_space() {
    assert_eq!(strip_markup("a\\ b\\,c\\;d"), "a b c d");
}

#[test]
fn nested_macro_and_spacing() {
    assert_eq!(
        strip_markup("\\bf{σ'p\\ =\\ 123.4\\ kPa}"),
        "σ'p = 123.4 kPa"
    );
    assert_eq!(strip_markup("\\mathbf{\\bf{x}\\ y}"), "x y");
}

#[test]
fn unclosed_macro_is_left_alone() {
    assert_eq!(strip_markup("\\bf{open"), "\\bf{open");
}

#[test]
fn changed_text_becomes_bold() {
    let mut text = Text::plain("\\bf{Compressibility\\ curve}");
    sanitize_text(&mut text);
    assert_eq!(text.content, "Compressibility curve");
    assert!(text.bold);
}

#[test]
fn clean_text_keeps_flags() {
    let mut text = Text::plain("Laboratory data");
    sanitize_text(&mut text);
    assert_eq!(text.content, "Laboratory data");
    assert!(!text.bold);
}

#[test]
fn sanitizing_twice_equals_once() {
    let samples = [
        "\\bf{Casagrande\\ method}",
        "\\mathbf{a\\,b}",
        "plain text",
        "",
        "\\bf{x} and \\bf{y}",
    ];
    for s in samples {
        let mut once = Text::plain(s);
        sanitize_text(&mut once);
        let mut twice = once.clone();
        sanitize_text(&mut twice);
        assert_eq!(once, twice, "idempotence failed for {s:?}");
    }
}

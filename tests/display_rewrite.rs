//! 표시 단위 재작성 회귀 테스트.
use sigmap_toolbox::display;
use sigmap_toolbox::figure::{Axes, Figure, Legend, LegendEntry, Text, TickFormat};
use sigmap_toolbox::units::StressUnit;

fn sample_figure() -> Figure {
    let mut axes = Axes::stress_semilog("Effective vertical stress [kPa]", "Void ratio");
    axes.legend = Some(Legend {
        title: Some(Text::plain("Compressibility curve")),
        entries: vec![
            LegendEntry {
                text: Text::plain("Laboratory data"),
                trace: 0,
            },
            LegendEntry {
                text: Text::plain("In-situ stress = 75.0 kPa"),
                trace: 1,
            },
        ],
    });
    Figure::single(axes)
}

#[test]
fn canonical_display_is_identity() {
    let figure = sample_figure();
    let mut displayed = figure.clone();
    display::apply(&mut displayed, StressUnit::KiloPascal);
    assert_eq!(figure, displayed);
}

#[test]
fn tick_formatter_is_replaced_and_minor_blanked() {
    let mut figure = sample_figure();
    display::apply(&mut figure, StressUnit::Tsf);
    let axes = &figure.axes[0];
    assert_eq!(axes.x_unit, Some(StressUnit::Tsf));
    assert_eq!(axes.x_minor, TickFormat::Blank);
    match &axes.x_major {
        TickFormat::Scaled { factor } => {
            assert!((factor - 1.0 / 95.76051796067168).abs() < 1e-15);
        }
        other => panic!("expected scaled formatter, got {other:?}"),
    }
    // 0은 어느 단위에서나 "0"으로 찍힌다.
    assert_eq!(axes.x_major.format(0.0), "0");
    assert_eq!(axes.x_minor.format(123.0), "");
}

#[test]
fn axis_label_symbol_is_substituted() {
    let mut figure = sample_figure();
    display::apply(&mut figure, StressUnit::Psi);
    assert_eq!(
        figure.axes[0].x_label,
        "Effective vertical stress [psi]"
    );
}

#[test]
fn axis_label_without_symbol_gets_suffix() {
    let mut figure = sample_figure();
    figure.axes[0].x_label = "Vertical stress".to_string();
    display::apply(&mut figure, StressUnit::Bar);
    assert_eq!(figure.axes[0].x_label, "Vertical stress [bar]");

    let mut empty = sample_figure();
    empty.axes[0].x_label = String::new();
    display::apply(&mut empty, StressUnit::Bar);
    assert_eq!(
        empty.axes[0].x_label,
        "Effective vertical stress [bar]"
    );
}

#[test]
fn legend_number_with_bracketed_unit_is_rewritten() {
    let rewritten = display::rewrite_legend_text(
        "value = 200 [kPa]",
        StressUnit::Tsf,
        1.0 / 95.76051796067168,
    );
    // 200/95.76051796067168 ≈ 2.088 → 유효숫자 3자리
    assert_eq!(rewritten, "value = 2.09 [tsf]");
}

#[test]
fn legend_number_with_bare_unit_is_rewritten() {
    let rewritten =
        display::rewrite_legend_text("In-situ stress = 75.0 kPa", StressUnit::Psi, 1.0 / 6.894757293168361);
    assert_eq!(rewritten, "In-situ stress = 10.9 psi");
}

#[test]
fn bracketed_unit_without_number_is_replaced_verbatim() {
    let rewritten = display::rewrite_legend_text("stress [kPa]", StressUnit::Ksf, 1.0 / 47.88025898033472);
    assert_eq!(rewritten, "stress [ksf]");
}

#[test]
fn unrelated_text_is_untouched() {
    let s = "no unit tokens here";
    assert_eq!(
        display::rewrite_legend_text(s, StressUnit::Psi, 1.0),
        s.to_string()
    );
}

#[test]
fn tiered_precision() {
    assert_eq!(display::format_tiered(150.0), "150");
    assert_eq!(display::format_tiered(15.0), "15.0");
    assert_eq!(display::format_tiered(5.0), "5.00");
    assert_eq!(display::format_tiered(0.0), "0");
    assert_eq!(display::format_tiered(0.05), "0.0500");
}

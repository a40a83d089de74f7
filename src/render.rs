//! `Figure`를 PNG로 래스터라이즈한다. 좌표 데이터는 kPa 기준 그대로 두고
//! 눈금 라벨만 그림이 들고 있는 `TickFormat`을 통해 찍는다.

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::figure::{format_compact, Axes, AxisScale, Figure, TickFormat, TraceKind};
use crate::style::PlotStyle;

/// 렌더링 오류.
#[derive(Debug)]
pub enum RenderError {
    /// 드로잉 백엔드/폰트/입출력 오류
    Backend(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Backend(msg) => write!(f, "렌더링 오류: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

fn to_err<E: std::error::Error>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// 그림을 지정 경로에 PNG로 저장한다. 크기와 해상도는 스타일이 정한다.
pub fn save_png(figure: &Figure, path: &Path, style: &PlotStyle) -> Result<(), RenderError> {
    let root =
        BitMapBackend::new(path, (style.width_px(), style.height_px())).into_drawing_area();
    root.fill(&WHITE).map_err(to_err)?;
    if !figure.axes.is_empty() {
        let areas = root.split_evenly((figure.axes.len(), 1));
        for (axes, area) in figure.axes.iter().zip(areas.iter()) {
            draw_axes(axes, area, style)?;
        }
    }
    root.present().map_err(to_err)
}

fn draw_axes(
    axes: &Axes,
    area: &DrawingArea<BitMapBackend, Shift>,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let ((x_min, x_max), (y_min, y_max)) = data_bounds(axes);
    match axes.x_scale {
        AxisScale::Log10 => {
            let mut chart = ChartBuilder::on(area)
                .margin(style.margin_px)
                .x_label_area_size(style.x_label_area_px)
                .y_label_area_size(style.y_label_area_px)
                .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)
                .map_err(to_err)?;
            draw_content(&mut chart, axes, style)?;
        }
        AxisScale::Linear => {
            let mut chart = ChartBuilder::on(area)
                .margin(style.margin_px)
                .x_label_area_size(style.x_label_area_px)
                .y_label_area_size(style.y_label_area_px)
                .build_cartesian_2d(x_min..x_max, y_min..y_max)
                .map_err(to_err)?;
            draw_content(&mut chart, axes, style)?;
        }
    }
    draw_legend(axes, area, style)
}

fn draw_content<DB, X, Y>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
    axes: &Axes,
    style: &PlotStyle,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    // 보조 눈금 라벨이 비워졌으면 보조 격자선도 그리지 않는다.
    let light_style: ShapeStyle = if axes.x_minor == TickFormat::Blank {
        TRANSPARENT.filled()
    } else {
        RGBColor(225, 225, 225).filled()
    };
    chart
        .configure_mesh()
        .x_desc(axes.x_label.as_str())
        .y_desc(axes.y_label.as_str())
        .axis_desc_style(("sans-serif", style.font_px))
        .label_style(("sans-serif", style.font_px))
        .x_label_formatter(&|v: &f64| axes.x_major.format(*v))
        .y_label_formatter(&|v: &f64| format_compact(*v))
        .light_line_style(light_style)
        .draw()
        .map_err(to_err)?;

    for trace in &axes.traces {
        let color = palette_color(style, trace.color);
        let points: Vec<(f64, f64)> = trace
            .xs
            .iter()
            .zip(&trace.ys)
            .map(|(&x, &y)| (x, y))
            .collect();
        if points.is_empty() {
            continue;
        }
        match trace.kind {
            TraceKind::Line => {
                chart
                    .draw_series(LineSeries::new(
                        points,
                        color.stroke_width(style.line_px),
                    ))
                    .map_err(to_err)?;
            }
            TraceKind::LineMarkers => {
                chart
                    .draw_series(LineSeries::new(
                        points.clone(),
                        color.stroke_width(style.line_px),
                    ))
                    .map_err(to_err)?;
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|p| Circle::new(*p, style.marker_px, color.filled())),
                    )
                    .map_err(to_err)?;
            }
            TraceKind::Dashed => {
                chart
                    .draw_series(DashedLineSeries::new(
                        points,
                        8,
                        5,
                        color.stroke_width(style.line_px),
                    ))
                    .map_err(to_err)?;
            }
            TraceKind::Scatter => {
                chart
                    .draw_series(points.iter().map(|p| {
                        Circle::new(*p, style.marker_px + 2, color.filled())
                    }))
                    .map_err(to_err)?;
            }
        }
    }
    Ok(())
}

fn draw_legend(
    axes: &Axes,
    area: &DrawingArea<BitMapBackend, Shift>,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let legend = match &axes.legend {
        Some(l) => l,
        None => return Ok(()),
    };
    if legend.title.is_none() && legend.entries.is_empty() {
        return Ok(());
    }
    let (width, _) = area.dim_in_pixel();
    let font_px = style.legend_font_px as i32;
    let char_w = (style.legend_font_px as f64 * 0.55).round() as i32;
    let line_h = (style.legend_font_px as f64 * 1.5).round() as i32;
    let sample_w = 3 * char_w;

    let mut max_chars = legend
        .title
        .as_ref()
        .map(|t| t.content.chars().count())
        .unwrap_or(0);
    for entry in &legend.entries {
        max_chars = max_chars.max(entry.text.content.chars().count() + 4);
    }
    let lines = legend.entries.len() + usize::from(legend.title.is_some());
    let box_w = char_w * max_chars as i32 + sample_w;
    let box_h = line_h * lines as i32 + 16;
    let x0 = width as i32 - box_w - style.margin_px as i32 - 8;
    let y0 = style.margin_px as i32 + 8;

    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_w, y0 + box_h)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(to_err)?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_w, y0 + box_h)],
        BLACK.stroke_width(1),
    ))
    .map_err(to_err)?;

    let mut y = y0 + 8;
    if let Some(title) = &legend.title {
        let text_w = char_w * title.content.chars().count() as i32;
        let x = x0 + (box_w - text_w) / 2;
        area.draw(&Text::new(
            title.content.clone(),
            (x.max(x0 + 4), y),
            text_style(style.legend_font_px, title.bold),
        ))
        .map_err(to_err)?;
        y += line_h;
    }
    for entry in &legend.entries {
        let color = axes
            .traces
            .get(entry.trace)
            .map(|t| palette_color(style, t.color))
            .unwrap_or(BLACK);
        area.draw(&PathElement::new(
            vec![
                (x0 + 6, y + font_px / 2),
                (x0 + sample_w - 6, y + font_px / 2),
            ],
            color.stroke_width(style.line_px),
        ))
        .map_err(to_err)?;
        area.draw(&Text::new(
            entry.text.content.clone(),
            (x0 + sample_w, y),
            text_style(style.legend_font_px, entry.text.bold),
        ))
        .map_err(to_err)?;
        y += line_h;
    }
    Ok(())
}

fn text_style(size: u32, bold: bool) -> TextStyle<'static> {
    let font = FontDesc::new(
        FontFamily::SansSerif,
        size as f64,
        if bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        },
    );
    TextStyle::from(font).color(&BLACK)
}

fn palette_color(style: &PlotStyle, index: usize) -> RGBColor {
    let (r, g, b) = style.palette[index % style.palette.len()];
    RGBColor(r, g, b)
}

fn data_bounds(axes: &Axes) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for trace in &axes.traces {
        for (&x, &y) in trace.xs.iter().zip(&trace.ys) {
            if x.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
            if y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
    }
    if !(x_min.is_finite() && x_max.is_finite()) {
        x_min = 0.1;
        x_max = 10.0;
    }
    if !(y_min.is_finite() && y_max.is_finite()) {
        y_min = 0.0;
        y_max = 1.0;
    }
    match axes.x_scale {
        AxisScale::Log10 => {
            x_min = (x_min.max(1e-6)) / 1.25;
            x_max *= 1.25;
        }
        AxisScale::Linear => {
            let pad = pad_of(x_min, x_max);
            x_min -= pad;
            x_max += pad;
        }
    }
    let pad = pad_of(y_min, y_max);
    y_min -= pad;
    y_max += pad;
    ((x_min, x_max), (y_min, y_max))
}

fn pad_of(min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        span * 0.05
    } else {
        1.0
    }
}

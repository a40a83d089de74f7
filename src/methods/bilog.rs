use super::fit::{intersect, two_segment_fit, LineFit};
use super::{log10_stress, MethodError, SigmaPModel};
use crate::data::OedometerData;
use crate::figure::{Axes, Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// bilog 계열(양대수 좌표의 두 직선 적합).
///
/// 옵션으로 좌표계를 고른다:
/// 1 = Butterfield: ln(1+e) - ln σ'v
/// 2 = Oikawa: log(1+e) - log σ'v
/// 3 = Onitsuka et al.: ln(1+e) - log σ'v
/// 항복 전/후 두 직선의 교점 응력이 σ'p이다.
pub struct Bilog {
    opt: u8,
    sigma_p_kpa: Option<f64>,
}

impl Bilog {
    pub fn new(opt: u8) -> Self {
        Self {
            opt,
            sigma_p_kpa: None,
        }
    }

    fn title(&self) -> &'static str {
        match self.opt {
            1 => "\\bf{Butterfield\\ method}",
            2 => "\\bf{Oikawa\\ method}",
            _ => "\\bf{Onitsuka\\ et\\ al.\\ method}",
        }
    }

    fn y_label(&self) -> &'static str {
        match self.opt {
            2 => "log (1 + e)",
            _ => "ln (1 + e)",
        }
    }
}

impl SigmaPModel for Bilog {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        if !(1..=3).contains(&self.opt) {
            return Err(MethodError::InvalidOption(self.opt));
        }
        let n = data.len();
        if n < 4 {
            return Err(MethodError::TooFewPoints { needed: 4, got: n });
        }
        let x_log10 = log10_stress(data)?;
        // 적합용 x 좌표: Butterfield만 자연로그를 쓴다.
        let xs: Vec<f64> = if self.opt == 1 {
            data.stress_kpa().iter().map(|s| s.ln()).collect()
        } else {
            x_log10.clone()
        };
        let mut ys = Vec::with_capacity(n);
        for &e in data.void_ratio() {
            if e <= -1.0 {
                return Err(MethodError::FitFailed("간극비가 -1 이하"));
            }
            let v = 1.0 + e;
            ys.push(if self.opt == 2 { v.log10() } else { v.ln() });
        }

        let seg = two_segment_fit(&xs, &ys).ok_or(MethodError::FitFailed("두 구간 적합"))?;
        let (xi, yi) = intersect(
            seg.head.slope,
            seg.head.intercept,
            seg.tail.slope,
            seg.tail.intercept,
        )
        .ok_or(MethodError::FitFailed("두 직선이 평행"))?;
        let sigma_p = if self.opt == 1 { xi.exp() } else { 10f64.powf(xi) };
        if !sigma_p.is_finite() || sigma_p <= 0.0 {
            return Err(MethodError::FitFailed("교점 응력이 비물리적"));
        }
        self.sigma_p_kpa = Some(sigma_p);

        // 작도는 변환된 세로축 - log 응력 평면에서 한다.
        let mut axes = Axes::stress_semilog("Effective vertical stress [kPa]", self.y_label());
        axes.traces.push(Trace::new(
            data.stress_kpa().to_vec(),
            ys.clone(),
            TraceKind::LineMarkers,
            0,
        ));
        let line_y = |line: &LineFit, sigma: f64| {
            let x = if self.opt == 1 { sigma.ln() } else { sigma.log10() };
            line.at(x)
        };
        let s_lo = data.stress_kpa()[0];
        let s_hi = data.stress_kpa()[n - 1];
        axes.traces.push(Trace::new(
            vec![s_lo, sigma_p],
            vec![line_y(&seg.head, s_lo), yi],
            TraceKind::Dashed,
            1,
        ));
        axes.traces.push(Trace::new(
            vec![sigma_p, s_hi],
            vec![yi, line_y(&seg.tail, s_hi)],
            TraceKind::Dashed,
            2,
        ));
        axes.traces
            .push(Trace::new(vec![sigma_p], vec![yi], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain(self.title())),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Laboratory curve"),
                    trace: 0,
                },
                LegendEntry {
                    text: Text::plain("Pre-yield line"),
                    trace: 1,
                },
                LegendEntry {
                    text: Text::plain("Post-yield line"),
                    trace: 2,
                },
                LegendEntry {
                    text: Text::plain(format!("\\bf{{σ'p\\ =\\ {sigma_p:.1}\\ kPa}}")),
                    trace: 3,
                },
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

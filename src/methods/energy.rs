use super::fit::{intersect, linear_fit, slope_through_origin, two_segment_fit};
use super::{MethodError, SigmaPModel};
use crate::data::OedometerData;
use crate::figure::{Axes, Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// 단위체적당 누적 변형 에너지. 사다리꼴 적분:
/// W_i = Σ ½(σ_j + σ_{j+1})(ε_{j+1} - ε_j)
pub(crate) fn cumulative_work(data: &OedometerData) -> Vec<f64> {
    let stress = data.stress_kpa();
    let strain = data.strain();
    let mut work = Vec::with_capacity(stress.len());
    let mut acc = 0.0;
    work.push(0.0);
    for i in 1..stress.len() {
        acc += 0.5 * (stress[i - 1] + stress[i]) * (strain[i] - strain[i - 1]);
        work.push(acc);
    }
    work
}

fn energy_axes(data: &OedometerData, work: &[f64]) -> Axes {
    let mut axes = Axes::stress_linear(
        "Effective vertical stress [kPa]",
        "Total work per unit volume [kJ/m³]",
    );
    axes.traces.push(Trace::new(
        data.stress_kpa().to_vec(),
        work.to_vec(),
        TraceKind::LineMarkers,
        0,
    ));
    axes
}

fn sigma_entry(sigma_p: f64, trace: usize) -> LegendEntry {
    LegendEntry {
        text: Text::plain(format!("\\bf{{σ'p\\ =\\ {sigma_p:.1}\\ kPa}}")),
        trace,
    }
}

/// Wang & Frost 변형 에너지법.
///
/// 항복 전 구간은 원점을 지나는 직선으로, 항복 후 구간은 꼬리 1/3의
/// 직선으로 적합해 두 직선의 교점 응력을 σ'p로 취한다.
pub struct WangAndFrost {
    sigma_p_kpa: Option<f64>,
}

impl WangAndFrost {
    pub fn new() -> Self {
        Self { sigma_p_kpa: None }
    }
}

impl Default for WangAndFrost {
    fn default() -> Self {
        Self::new()
    }
}

impl SigmaPModel for WangAndFrost {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        let n = data.len();
        if n < 5 {
            return Err(MethodError::TooFewPoints { needed: 5, got: n });
        }
        let work = cumulative_work(data);
        let stress = data.stress_kpa();
        let head = (n / 3).max(2);
        let pre_slope = slope_through_origin(&stress[..head], &work[..head])
            .ok_or(MethodError::FitFailed("항복 전 구간 적합"))?;
        let start = n - (n / 3).max(2);
        let post = linear_fit(&stress[start..], &work[start..])
            .ok_or(MethodError::FitFailed("항복 후 구간 적합"))?;
        let (sigma_p, w_p) = intersect(pre_slope, 0.0, post.slope, post.intercept)
            .ok_or(MethodError::FitFailed("두 직선이 평행"))?;
        if sigma_p <= 0.0 {
            return Err(MethodError::FitFailed("교점 응력이 비물리적"));
        }
        self.sigma_p_kpa = Some(sigma_p);

        let mut axes = energy_axes(data, &work);
        let s_hi = stress[n - 1];
        axes.traces.push(Trace::new(
            vec![0.0, sigma_p],
            vec![0.0, w_p],
            TraceKind::Dashed,
            1,
        ));
        axes.traces.push(Trace::new(
            vec![sigma_p, s_hi],
            vec![w_p, post.at(s_hi)],
            TraceKind::Dashed,
            2,
        ));
        axes.traces
            .push(Trace::new(vec![sigma_p], vec![w_p], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Wang\\ &\\ Frost\\ method}")),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Strain energy"),
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
                sigma_entry(sigma_p, 3),
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

/// Becker et al. 변형 에너지법.
///
/// 누적 에너지-응력 점열 전체에서 잔차가 최소가 되는 분할을 찾아
/// 앞/뒤 두 직선을 적합하고 교점 응력을 σ'p로 취한다.
pub struct BeckerEtAl {
    sigma_p_kpa: Option<f64>,
}

impl BeckerEtAl {
    pub fn new() -> Self {
        Self { sigma_p_kpa: None }
    }
}

impl Default for BeckerEtAl {
    fn default() -> Self {
        Self::new()
    }
}

impl SigmaPModel for BeckerEtAl {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        let n = data.len();
        if n < 5 {
            return Err(MethodError::TooFewPoints { needed: 5, got: n });
        }
        let work = cumulative_work(data);
        let stress = data.stress_kpa();
        let seg =
            two_segment_fit(stress, &work).ok_or(MethodError::FitFailed("두 구간 적합"))?;
        let (sigma_p, w_p) = intersect(
            seg.head.slope,
            seg.head.intercept,
            seg.tail.slope,
            seg.tail.intercept,
        )
        .ok_or(MethodError::FitFailed("두 직선이 평행"))?;
        if sigma_p <= 0.0 {
            return Err(MethodError::FitFailed("교점 응력이 비물리적"));
        }
        self.sigma_p_kpa = Some(sigma_p);

        let mut axes = energy_axes(data, &work);
        let s_lo = stress[0];
        let s_hi = stress[n - 1];
        axes.traces.push(Trace::new(
            vec![s_lo, sigma_p],
            vec![seg.head.at(s_lo), w_p],
            TraceKind::Dashed,
            1,
        ));
        axes.traces.push(Trace::new(
            vec![sigma_p, s_hi],
            vec![w_p, seg.tail.at(s_hi)],
            TraceKind::Dashed,
            2,
        ));
        axes.traces
            .push(Trace::new(vec![sigma_p], vec![w_p], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Becker\\ et\\ al.\\ method}")),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Strain energy"),
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
                sigma_entry(sigma_p, 3),
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

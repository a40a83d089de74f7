use super::fit::{intersect, linear_fit, poly3_fit, poly_eval};
use super::{lab_curve_axes, log10_stress, tail_len, MethodError, SigmaPModel};
use crate::data::OedometerData;
use crate::figure::{Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// Casagrande 작도법.
///
/// 압축곡선을 3차 다항식으로 적합해 최대 곡률점을 찾고, 그 점의 수평선과
/// 접선의 이등분선이 처녀압축선과 만나는 응력을 σ'p로 취한다.
/// `loglog`가 참이면 최대 곡률점 탐색을 log(1+e)-log σ 좌표에서 수행한다.
pub struct Casagrande {
    loglog: bool,
    sigma_p_kpa: Option<f64>,
}

impl Casagrande {
    pub fn new(loglog: bool) -> Self {
        Self {
            loglog,
            sigma_p_kpa: None,
        }
    }
}

impl SigmaPModel for Casagrande {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        let n = data.len();
        if n < 5 {
            return Err(MethodError::TooFewPoints { needed: 5, got: n });
        }
        let x = log10_stress(data)?;
        let e = data.void_ratio();

        // 곡률 탐색 좌표계. 작도 자체는 항상 간극비-log 응력 평면에서 한다.
        let search_y: Vec<f64> = if self.loglog {
            let mut out = Vec::with_capacity(n);
            for &ei in e {
                if ei <= -1.0 {
                    return Err(MethodError::FitFailed("간극비가 -1 이하"));
                }
                out.push((1.0 + ei).log10());
            }
            out
        } else {
            e.to_vec()
        };
        let c_search =
            poly3_fit(&x, &search_y).ok_or(MethodError::FitFailed("곡률 탐색 다항식 적합"))?;
        let c_geom = poly3_fit(&x, e).ok_or(MethodError::FitFailed("압축곡선 다항식 적합"))?;

        // 내부 구간에서 최대 곡률점을 격자 탐색한다.
        let span = x[n - 1] - x[0];
        if span <= 0.0 {
            return Err(MethodError::FitFailed("응력 범위가 비어 있음"));
        }
        let steps = 400;
        let mut xc = x[0];
        let mut best = f64::NEG_INFINITY;
        for i in 0..=steps {
            let xi = x[0] + span * (0.05 + 0.9 * i as f64 / steps as f64);
            let d1 = c_search[1] + 2.0 * c_search[2] * xi + 3.0 * c_search[3] * xi * xi;
            let d2 = 2.0 * c_search[2] + 6.0 * c_search[3] * xi;
            let kappa = d2.abs() / (1.0 + d1 * d1).powf(1.5);
            if kappa > best {
                best = kappa;
                xc = xi;
            }
        }
        let ec = poly_eval(&c_geom, xc);
        let tangent_slope = c_geom[1] + 2.0 * c_geom[2] * xc + 3.0 * c_geom[3] * xc * xc;
        // 수평선과 접선이 이루는 각의 이등분선
        let bisector_slope = (tangent_slope.atan() / 2.0).tan();
        let bisector_intercept = ec - bisector_slope * xc;

        let start = n - tail_len(n);
        let ncl = linear_fit(&x[start..], &e[start..])
            .ok_or(MethodError::FitFailed("처녀압축선 적합"))?;
        let (xp, ep) = intersect(bisector_slope, bisector_intercept, ncl.slope, ncl.intercept)
            .ok_or(MethodError::FitFailed("이등분선과 처녀압축선이 만나지 않음"))?;
        let sigma_p = 10f64.powf(xp);
        self.sigma_p_kpa = Some(sigma_p);

        // 작도: 수평선/접선/이등분선/처녀압축선과 σ'p 점
        let mut axes = lab_curve_axes(data);
        let sc = 10f64.powf(xc);
        let x_hi = x[n - 1];
        let s_hi = 10f64.powf(x_hi);
        axes.traces.push(Trace::new(
            vec![sc, s_hi],
            vec![ec, ec],
            TraceKind::Dashed,
            5,
        ));
        axes.traces.push(Trace::new(
            vec![sc, s_hi],
            vec![ec, ec + tangent_slope * (x_hi - xc)],
            TraceKind::Dashed,
            4,
        ));
        axes.traces.push(Trace::new(
            vec![sc, 10f64.powf(xp + 0.1 * span)],
            vec![
                ec,
                bisector_slope * (xp + 0.1 * span) + bisector_intercept,
            ],
            TraceKind::Dashed,
            1,
        ));
        let x_ncl_lo = xp.min(x[start]);
        axes.traces.push(Trace::new(
            vec![10f64.powf(x_ncl_lo), s_hi],
            vec![ncl.at(x_ncl_lo), ncl.at(x_hi)],
            TraceKind::Dashed,
            2,
        ));
        axes.traces
            .push(Trace::new(vec![sc], vec![ec], TraceKind::Scatter, 5));
        axes.traces
            .push(Trace::new(vec![sigma_p], vec![ep], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Casagrande\\ method}")),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Laboratory curve"),
                    trace: 0,
                },
                LegendEntry {
                    text: Text::plain("Bisector"),
                    trace: 3,
                },
                LegendEntry {
                    text: Text::plain("Virgin compression line"),
                    trace: 4,
                },
                LegendEntry {
                    text: Text::plain("Maximum curvature point"),
                    trace: 5,
                },
                LegendEntry {
                    text: Text::plain(format!("\\bf{{σ'p\\ =\\ {sigma_p:.1}\\ kPa}}")),
                    trace: 6,
                },
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

use super::fit::{interp_at, linear_fit};
use super::{lab_curve_axes, log10_stress, tail_len, MethodError, SigmaPModel};
use crate::data::OedometerData;
use crate::figure::{Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// Pacheco Silva 작도법.
///
/// 재하 전 간극비 수평선과 처녀압축선 연장의 교점에서 곡선까지 내려간 뒤,
/// 다시 수평으로 처녀압축선과 만나는 응력을 σ'p로 취한다.
pub struct PachecoSilva {
    sigma_p_kpa: Option<f64>,
}

impl PachecoSilva {
    pub fn new() -> Self {
        Self { sigma_p_kpa: None }
    }
}

impl Default for PachecoSilva {
    fn default() -> Self {
        Self::new()
    }
}

impl SigmaPModel for PachecoSilva {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        let n = data.len();
        if n < 4 {
            return Err(MethodError::TooFewPoints { needed: 4, got: n });
        }
        let x = log10_stress(data)?;
        let e = data.void_ratio();
        let e0 = data
            .initial_void_ratio()
            .ok_or(MethodError::FitFailed("재하 전 간극비가 없음"))?;

        let start = n - tail_len(n);
        let ncl = linear_fit(&x[start..], &e[start..])
            .ok_or(MethodError::FitFailed("처녀압축선 적합"))?;
        if ncl.slope.abs() < 1e-12 {
            return Err(MethodError::FitFailed("처녀압축선이 수평"));
        }
        // 수평선 e = e0 과 처녀압축선 연장의 교점 A
        let xa = (e0 - ncl.intercept) / ncl.slope;
        // A에서 수직으로 내린 곡선 위 점 B
        let eb = interp_at(&x, e, xa)
            .ok_or(MethodError::FitFailed("수직 투영이 곡선 범위를 벗어남"))?;
        // B에서 수평으로 처녀압축선과 만나는 점
        let xp = (eb - ncl.intercept) / ncl.slope;
        let sigma_p = 10f64.powf(xp);
        self.sigma_p_kpa = Some(sigma_p);

        let mut axes = lab_curve_axes(data);
        let x_hi = x[n - 1];
        let s_hi = 10f64.powf(x_hi);
        let sa = 10f64.powf(xa);
        let sp = sigma_p;
        // 처녀압축선 연장
        let x_lo = xa.min(x[start]);
        axes.traces.push(Trace::new(
            vec![10f64.powf(x_lo), s_hi],
            vec![ncl.at(x_lo), ncl.at(x_hi)],
            TraceKind::Dashed,
            2,
        ));
        // e0 수평선
        axes.traces.push(Trace::new(
            vec![10f64.powf(x[0]), sa],
            vec![e0, e0],
            TraceKind::Dashed,
            5,
        ));
        // 수직 내림선과 수평 되돌림선
        axes.traces.push(Trace::new(
            vec![sa, sa],
            vec![e0, eb],
            TraceKind::Dashed,
            4,
        ));
        axes.traces.push(Trace::new(
            vec![sa, sp],
            vec![eb, eb],
            TraceKind::Dashed,
            4,
        ));
        axes.traces
            .push(Trace::new(vec![sp], vec![eb], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Pacheco\\ Silva\\ method}")),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Laboratory curve"),
                    trace: 0,
                },
                LegendEntry {
                    text: Text::plain("Virgin compression line"),
                    trace: 1,
                },
                LegendEntry {
                    text: Text::plain("Initial void ratio"),
                    trace: 2,
                },
                LegendEntry {
                    text: Text::plain(format!("\\bf{{σ'p\\ =\\ {sigma_p:.1}\\ kPa}}")),
                    trace: 5,
                },
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

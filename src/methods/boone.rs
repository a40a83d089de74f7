use super::fit::{intersect, linear_fit};
use super::{lab_curve_axes, log10_stress, tail_len, MethodError, SigmaPModel};
use crate::data::OedometerData;
use crate::figure::{Figure, Legend, LegendEntry, Text, Trace, TraceKind};

/// Boone(2010) 작도법.
///
/// 현장 상태점 (σ'v0, e0)를 지나고 재압축 기울기 Cr을 갖는 직선이
/// 처녀압축선과 만나는 응력을 σ'p로 취한다. 현장 유효 수직응력이
/// 0보다 커야 쓸 수 있는 유일한 산정법이다.
pub struct Boone {
    sigma_p_kpa: Option<f64>,
}

impl Boone {
    pub fn new() -> Self {
        Self { sigma_p_kpa: None }
    }
}

impl Default for Boone {
    fn default() -> Self {
        Self::new()
    }
}

impl SigmaPModel for Boone {
    fn get_sigma_p(&mut self, data: &OedometerData) -> Result<Figure, MethodError> {
        let n = data.len();
        if n < 5 {
            return Err(MethodError::TooFewPoints { needed: 5, got: n });
        }
        if data.sigma_v_kpa() <= 0.0 {
            return Err(MethodError::MissingInSitu);
        }
        let x = log10_stress(data)?;
        let e = data.void_ratio();
        let e0 = data
            .initial_void_ratio()
            .ok_or(MethodError::FitFailed("재하 전 간극비가 없음"))?;

        // 재압축 기울기: 초기 구간 직선 적합
        let head = 3.max(n / 4).min(n - 2);
        let rec = linear_fit(&x[..head], &e[..head])
            .ok_or(MethodError::FitFailed("재압축 구간 적합"))?;
        let start = n - tail_len(n);
        let ncl = linear_fit(&x[start..], &e[start..])
            .ok_or(MethodError::FitFailed("처녀압축선 적합"))?;

        let xv = data.sigma_v_kpa().log10();
        let intercept = e0 - rec.slope * xv;
        let (xp, ep) = intersect(rec.slope, intercept, ncl.slope, ncl.intercept)
            .ok_or(MethodError::FitFailed("재압축선과 처녀압축선이 평행"))?;
        let sigma_p = 10f64.powf(xp);
        self.sigma_p_kpa = Some(sigma_p);

        let mut axes = lab_curve_axes(data);
        let x_hi = x[n - 1];
        let s_hi = 10f64.powf(x_hi);
        // 현장 상태점을 지나는 재압축선
        axes.traces.push(Trace::new(
            vec![data.sigma_v_kpa(), 10f64.powf(xp)],
            vec![e0, ep],
            TraceKind::Dashed,
            1,
        ));
        let x_lo = xp.min(x[start]);
        axes.traces.push(Trace::new(
            vec![10f64.powf(x_lo), s_hi],
            vec![ncl.at(x_lo), ncl.at(x_hi)],
            TraceKind::Dashed,
            2,
        ));
        axes.traces.push(Trace::new(
            vec![data.sigma_v_kpa()],
            vec![e0],
            TraceKind::Scatter,
            4,
        ));
        axes.traces
            .push(Trace::new(vec![sigma_p], vec![ep], TraceKind::Scatter, 3));
        axes.legend = Some(Legend {
            title: Some(Text::plain("\\bf{Boone\\ method}")),
            entries: vec![
                LegendEntry {
                    text: Text::plain("Laboratory curve"),
                    trace: 0,
                },
                LegendEntry {
                    text: Text::plain("Recompression line"),
                    trace: 1,
                },
                LegendEntry {
                    text: Text::plain("Virgin compression line"),
                    trace: 2,
                },
                LegendEntry {
                    text: Text::plain(format!(
                        "In-situ state ({:.1} kPa)",
                        data.sigma_v_kpa()
                    )),
                    trace: 3,
                },
                LegendEntry {
                    text: Text::plain(format!("\\bf{{σ'p\\ =\\ {sigma_p:.1}\\ kPa}}")),
                    trace: 4,
                },
            ],
        });
        Ok(Figure::single(axes))
    }

    fn sigma_p_kpa(&self) -> Option<f64> {
        self.sigma_p_kpa
    }
}

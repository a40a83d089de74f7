//! psi 입력 → kPa 정규화 → 산정 → 표시 환산의 종단 회귀 테스트.
//! 렌더링은 거치지 않고 파이프라인의 수치 경로만 본다.
use sigmap_toolbox::conversion;
use sigmap_toolbox::data::OedometerData;
use sigmap_toolbox::dispatch::{self, AnalysisMethod};
use sigmap_toolbox::quantity::Measurement;
use sigmap_toolbox::units::{from_kpa, StressUnit};

const PSI_KPA: f64 = 6.894757293168361;

fn psi_stress_column() -> Vec<f64> {
    vec![1.45, 2.9, 5.8, 11.6, 23.2, 46.4, 92.8, 185.6]
}

#[test]
fn psi_series_normalizes_with_exact_factor() {
    let raw = psi_stress_column();
    let normalized = conversion::normalize_series(&raw, StressUnit::Psi).expect("normalize");
    assert_eq!(normalized.len(), raw.len());
    for (r, n) in raw.iter().zip(&normalized) {
        let expected = r * PSI_KPA;
        assert!(
            ((n - expected) / expected).abs() < 1e-12,
            "{r} psi -> {n} kPa, expected {expected}"
        );
    }
}

#[test]
fn in_situ_scalar_normalizes_once() {
    let sigma_v = Measurement::new(10.886, StressUnit::Psi).expect("measurement");
    assert!((sigma_v.value_kpa - 10.886 * PSI_KPA).abs() < 1e-9);
    // 표시 단위가 기준 단위면 환산은 항등이다.
    assert_eq!(sigma_v.in_unit(StressUnit::KiloPascal), sigma_v.value_kpa);
}

#[test]
fn displayed_scalar_matches_canonical_without_double_conversion() {
    let raw = psi_stress_column();
    let stress_kpa = conversion::normalize_series(&raw, StressUnit::Psi).expect("normalize");
    let e0 = 1.10;
    let void_ratio: Vec<f64> = stress_kpa
        .iter()
        .map(|s| {
            let x = s.log10();
            let yield_x = 80f64.log10();
            if x <= yield_x {
                e0 - 0.05 * (x - 1.0)
            } else {
                (e0 - 0.05 * (yield_x - 1.0)) - 0.45 * (x - yield_x)
            }
        })
        .collect();
    let strain: Vec<f64> = void_ratio.iter().map(|e| (e0 - e) / (1.0 + e0)).collect();
    let sigma_v = Measurement::new(10.886, StressUnit::Psi).expect("measurement");
    let data = OedometerData::new(stress_kpa, strain, void_ratio, sigma_v.value_kpa);

    let outcome = dispatch::run(AnalysisMethod::BeckerEtAl, &data).expect("run");
    let sigma_p_kpa = outcome.sigma_p_kpa.expect("scalar");
    // 표시 단위 = 기준 단위: 산정기가 돌려준 kPa 값이 그대로 나와야 한다
    // (0.01% 이내, 이중 변환이 없음을 증명).
    let displayed = from_kpa(sigma_p_kpa, StressUnit::KiloPascal);
    assert!(((displayed - sigma_p_kpa) / sigma_p_kpa).abs() < 1e-4);
    // 다른 표시 단위는 배율 하나로만 달라진다.
    let displayed_psi = from_kpa(sigma_p_kpa, StressUnit::Psi);
    assert!(((displayed_psi * PSI_KPA - sigma_p_kpa) / sigma_p_kpa).abs() < 1e-9);
}

#[test]
fn strain_and_void_ratio_pass_through_unmodified() {
    let strain = vec![0.0, 0.01, 0.02];
    let void_ratio = vec![1.1, 1.05, 1.0];
    let stress_kpa =
        conversion::normalize_series(&[1.0, 2.0, 3.0], StressUnit::MegaPascal).expect("normalize");
    let data = OedometerData::new(stress_kpa, strain.clone(), void_ratio.clone(), 0.0);
    assert_eq!(data.strain(), strain.as_slice());
    assert_eq!(data.void_ratio(), void_ratio.as_slice());
    assert_eq!(data.stress_kpa(), &[1000.0, 2000.0, 3000.0]);
}

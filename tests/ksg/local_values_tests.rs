use approx::assert_abs_diff_eq;
use ksgmeasure::estimators::{GlobalValue, LocalValues};
use ksgmeasure::{MutualInformation, estimate_conditional_mi, estimate_single_mi, normalize_mi};
use statrs::function::gamma::digamma;

use crate::test_helpers::{bivariate_gaussian, uniform};

#[test_log::test]
fn mi_local_values_match_formula() {
    let (x, y) = bivariate_gaussian(150, 0.5, 31);
    let est = MutualInformation::new_ksg(&x, &y, 3).unwrap();

    let (nx, ny) = est.marginal_counts();
    let locals = est.local_values();
    let n = x.len() as f64;
    for i in 0..x.len() {
        let expected = digamma(3.0) + digamma(n)
            - digamma(nx[i] as f64 + 1.0)
            - digamma(ny[i] as f64 + 1.0);
        assert_abs_diff_eq!(locals[i], expected, epsilon = 1e-12);
    }

    // Global equals mean of locals and the free function
    let mean_locals = locals.mean().unwrap();
    assert_abs_diff_eq!(est.global_value(), mean_locals, epsilon = 1e-12);
    assert_abs_diff_eq!(
        estimate_single_mi(&x, &y, 3).unwrap(),
        mean_locals,
        epsilon = 1e-12
    );
}

#[test_log::test]
fn cmi_local_values_match_formula() {
    let (x, y) = bivariate_gaussian(150, 0.5, 32);
    let z = uniform(150, 0.0, 1.0, 33);
    let est = MutualInformation::new_ksg_conditional(&x, &y, &z, 4).unwrap();

    let counts = est.marginal_counts();
    let locals = est.local_values();
    for i in 0..x.len() {
        let expected = digamma(4.0)
            - digamma(counts.nxz[i] as f64 + 1.0)
            - digamma(counts.nyz[i] as f64 + 1.0)
            + digamma(counts.nz[i] as f64 + 1.0);
        assert_abs_diff_eq!(locals[i], expected, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(
        estimate_conditional_mi(&x, &y, &z, 4).unwrap(),
        locals.mean().unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn log_base_rescales_values() {
    let (x, y) = bivariate_gaussian(300, 0.8, 34);
    let nats = MutualInformation::new_ksg(&x, &y, 3).unwrap().global_value();
    let bits = MutualInformation::new_ksg(&x, &y, 3)
        .unwrap()
        .with_base(2.0)
        .unwrap()
        .global_value();
    assert_abs_diff_eq!(bits, nats / std::f64::consts::LN_2, epsilon = 1e-12);

    let z = uniform(300, 0.0, 1.0, 35);
    let cmi_nats = MutualInformation::new_ksg_conditional(&x, &y, &z, 3)
        .unwrap()
        .global_value();
    let cmi_bits = MutualInformation::new_ksg_conditional(&x, &y, &z, 3)
        .unwrap()
        .with_base(2.0)
        .unwrap()
        .global_value();
    assert_abs_diff_eq!(cmi_bits, cmi_nats / std::f64::consts::LN_2, epsilon = 1e-12);
}

#[test]
fn normalization_recovers_gaussian_correlation() {
    assert_eq!(normalize_mi(0.0), 0.0);
    assert_eq!(normalize_mi(-0.01), 0.0);
    let rho: f64 = 0.8;
    assert_abs_diff_eq!(normalize_mi(-0.5 * (1.0 - rho * rho).ln()), rho, epsilon = 1e-12);

    let (x, y) = bivariate_gaussian(2000, rho, 36);
    let est = MutualInformation::new_ksg(&x, &y, 5).unwrap();
    assert_abs_diff_eq!(est.normalized_value(), rho, epsilon = 0.05);
    assert_abs_diff_eq!(est.normalized_value(), normalize_mi(est.global_value()), epsilon = 1e-12);
}

#[test]
fn estimators_accept_views_of_separately_owned_arrays() {
    use ksgmeasure::estimators::approaches::ksg::{
        KsgConditionalMutualInformation, KsgMutualInformation,
    };
    use ndarray::Array1;

    let (x, y) = bivariate_gaussian(120, 0.5, 37);
    let x = Array1::from(x);
    let z = Array1::from(uniform(120, 0.0, 1.0, 38));
    let mi = KsgMutualInformation::new(x.view(), y.as_slice().into(), 3).unwrap();
    assert_abs_diff_eq!(
        mi.global_value(),
        estimate_single_mi(x.as_slice().unwrap(), &y, 3).unwrap(),
        epsilon = 1e-12
    );

    let cmi = KsgConditionalMutualInformation::new(x.view(), (&y[..]).into(), z.view(), 3).unwrap();
    assert!(cmi.global_value().is_finite());
}

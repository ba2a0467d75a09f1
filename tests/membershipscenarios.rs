use std::sync::Arc;
use std::thread;

use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use fuzzymembership::explorer::parameterset::ParameterSet;
use fuzzymembership::math::samplegrid::SampleGrid;
use fuzzymembership::membership::bell::bell_mf;
use fuzzymembership::membership::gaussian::gaussian_mf;
use fuzzymembership::membership::membershipfunction::MembershipError;
use fuzzymembership::membership::sigmoidal::sigmoidal_mf;
use fuzzymembership::membership::trapezoidal::validate_trapezoidal;
use fuzzymembership::membership::triangular::{
    triangular_mf,
    validate_triangular
};

#[test]
fn triangular_on_default_grid() {
    let grid = Arc::new(SampleGrid::default());
    let curve = ParameterSet::Triangular { a: 2.0, b: 5.0, c: 8.0 }.evaluate(&grid).unwrap();
    assert_eq!(curve.len(), 1000);
    assert_eq!(curve.y(0), Some(0.0));
    assert_eq!(curve.y(999), Some(0.0));
    assert_abs_diff_eq!(triangular_mf(5.0, 2.0, 5.0, 8.0), 1.0, epsilon = 1e-9);

    // 網格不含 5.0，最高點落在最接近 5.0 的兩點之一
    let peak = curve.values().max();
    assert!(peak > 0.99 && peak <= 1.0);
    for (x, y) in curve.iter() {
        if !(2.0..=8.0).contains(&x) {
            assert_eq!(y, 0.0);
        }
    }
}

#[test]
fn gaussian_scenario() {
    assert_eq!(gaussian_mf(5.0, 5.0, 1.0), 1.0);
    assert_relative_eq!(gaussian_mf(6.0, 5.0, 1.0), 0.6065, epsilon = 1e-4);
}

#[test]
fn sigmoid_scenario() {
    assert_eq!(sigmoidal_mf(5.0, 1.0, 5.0), 0.5);
    assert_abs_diff_eq!(sigmoidal_mf(15.0, 1.0, 5.0), 1.0, epsilon = 1e-4);
}

#[test]
fn bell_peak() {
    assert_eq!(bell_mf(5.0, 1.0, 2.0, 5.0), 1.0);
    assert_eq!(bell_mf(-3.0, -0.5, 7.0, -3.0), 1.0);
}

#[test]
fn validators() {
    assert!(validate_triangular(2.0, 5.0, 8.0).is_ok());
    assert!(validate_triangular(5.0, 2.0, 8.0).is_err());
    assert!(validate_trapezoidal(2.0, 4.0, 6.0, 8.0).is_ok());
    assert!(validate_trapezoidal(2.0, 6.0, 4.0, 8.0).is_err());
}

#[test]
fn rejected_trapezoid_names_the_ordering() {
    let grid = Arc::new(SampleGrid::default());
    let error = ParameterSet::Trapezoidal { a: 2.0, b: 6.0, c: 4.0, d: 8.0 }
        .evaluate(&grid)
        .unwrap_err();
    assert!(matches!(error, MembershipError::InvalidParameterOrdering { ordering: "a < b < c < d", .. }));
}

#[test]
fn curves_preserve_grid_order() {
    let grid = Arc::new(SampleGrid::new(0.0, 10.0, 11));
    let curve = ParameterSet::Sigmoidal { a: 2.0, c: 5.0 }.evaluate(&grid).unwrap();
    let xs: Vec<f64> = curve.iter().map(|(x, _)| x).collect();
    let expected: Vec<f64> = grid.iter().collect();
    assert_eq!(xs, expected);
    let ys: Vec<f64> = curve.iter().map(|(_, y)| y).collect();
    assert!(ys.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(ys[5], 0.5);
}

#[test]
fn shared_grid_evaluates_across_threads() {
    let grid = Arc::new(SampleGrid::default());
    let handles: Vec<_> = [
        ParameterSet::Triangular { a: 2.0, b: 5.0, c: 8.0 },
        ParameterSet::Gaussian { mean: 5.0, sigma: 1.0 },
        ParameterSet::Trapezoidal { a: 2.0, b: 4.0, c: 6.0, d: 8.0 },
        ParameterSet::Bell { a: 1.0, b: 2.0, c: 5.0 },
        ParameterSet::Sigmoidal { a: 1.0, c: 5.0 }
    ]
        .into_iter()
        .map(|parameter_set| {
            let grid = Arc::clone(&grid);
            thread::spawn(move || parameter_set.evaluate(&grid).map(|curve| curve.len()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(1000));
    }
}

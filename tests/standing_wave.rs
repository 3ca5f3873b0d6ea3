use approx::assert_abs_diff_eq;
use tline_calc::prelude::*;

// ═══════════════════════════════════════════════════════════════════
//  Properties that must hold over the whole valid input domain
// ═══════════════════════════════════════════════════════════════════

fn grid() -> Vec<LineParameters> {
    let mut out = Vec::new();
    for &z0 in &[25.0, 50.0, 75.0, 150.0] {
        for &resistance in &[0.0, 1.0, 25.0, 50.0, 300.0, 1e4] {
            for &reactance in &[-500.0, -20.0, 0.0, 20.0, 500.0] {
                for &(frequency, length) in &[(1e6, 1000.0), (100e6, 2.0), (2.4e9, 0.37)] {
                    out.push(LineParameters { z0, resistance, reactance, frequency, length });
                }
            }
        }
    }
    out
}

#[test]
fn reflection_magnitude_is_bounded() {
    let calc = Calculator::default();
    for params in grid() {
        let r = calc.calculate(&params).unwrap();
        assert!(
            r.gamma_magnitude >= 0.0 && r.gamma_magnitude <= 1.0 + 1e-12,
            "|Γ| = {} for {:?}",
            r.gamma_magnitude,
            params
        );
        if params.resistance > 0.0 {
            assert!(r.gamma_magnitude < 1.0, "|Γ| = {} for {:?}", r.gamma_magnitude, params);
        }
    }
}

#[test]
fn vswr_recovers_reflection_magnitude() {
    let calc = Calculator::default();
    for params in grid().into_iter().filter(|p| p.resistance > 0.0) {
        let r = calc.calculate(&params).unwrap();
        assert!(r.vswr >= 1.0);
        let recovered = (r.vswr - 1.0) / (r.vswr + 1.0);
        assert_abs_diff_eq!(recovered, r.gamma_magnitude, epsilon = 1e-9);
    }
}

#[test]
fn angle_in_degrees_is_normalized() {
    let calc = Calculator::default();
    for params in grid() {
        let r = calc.calculate(&params).unwrap();
        assert!((0.0..360.0).contains(&r.gamma_angle_degrees), "{}", r.gamma_angle_degrees);
    }
}

#[test]
fn extrema_spacing() {
    let calc = Calculator::default();
    for params in grid() {
        let r = calc.calculate(&params).unwrap();
        let half = r.wavelength / 2.0;
        let tol = 1e-9 * r.wavelength.max(params.length);

        assert!((0.0..half).contains(&r.first_max_distance));
        assert!((0.0..half).contains(&r.first_min_distance));
        assert_abs_diff_eq!(
            (r.first_min_distance - r.first_max_distance).abs(),
            r.wavelength / 4.0,
            epsilon = tol
        );

        for list in [&r.voltage_max_positions, &r.voltage_min_positions] {
            assert!(list.iter().all(|&d| d >= 0.0 && d <= params.length));
            for pair in list.windows(2) {
                assert!(pair[1] > pair[0]);
                assert_abs_diff_eq!(pair[1] - pair[0], half, epsilon = tol);
            }
        }
    }
}

#[test]
fn extrema_cover_the_whole_line() {
    // 1 MHz over 1000 m is a little over three wavelengths
    let calc = Calculator::default();
    let r = calc
        .calculate(&LineParameters { frequency: 1e6, length: 1000.0, ..Default::default() })
        .unwrap();
    let half = r.wavelength / 2.0;

    assert_eq!(r.voltage_max_positions.len(), 6);
    assert_eq!(r.voltage_min_positions.len(), 7);
    let last = *r.voltage_max_positions.last().unwrap();
    assert!(last + half > 1000.0);
}

#[test]
fn matched_load() {
    let r = Calculator::default()
        .calculate(&LineParameters { z0: 75.0, resistance: 75.0, reactance: 0.0, ..Default::default() })
        .unwrap();

    assert_eq!(r.reflection_coefficient, Complex::ZERO);
    assert_eq!(r.gamma_magnitude, 0.0);
    assert_eq!(r.vswr, 1.0);
    assert_eq!(r.return_loss_db, f64::INFINITY);
}

#[test]
fn near_open_circuit() {
    let r = Calculator::default()
        .calculate(&LineParameters { z0: 50.0, resistance: 1e9, reactance: 0.0, ..Default::default() })
        .unwrap();

    assert_abs_diff_eq!(r.gamma_magnitude, 1.0, epsilon = 1e-6);
    assert!(r.vswr > 1e7, "VSWR = {}", r.vswr);
    assert!(r.return_loss_db < 1e-5);
    // open end: voltage maximum at the load
    assert_eq!(r.first_max_distance, 0.0);
}

#[test]
fn pure_reactance_reflects_totally() {
    let r = Calculator::default()
        .calculate(&LineParameters { resistance: 0.0, reactance: 50.0, ..Default::default() })
        .unwrap();

    assert_abs_diff_eq!(r.gamma_magnitude, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(r.gamma_angle_degrees, 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.return_loss_db, 0.0, epsilon = 1e-9);
}

#[test]
fn return_loss_floor_is_configurable() {
    let params = LineParameters { z0: 50.0, resistance: 50.000_000_000_1, reactance: 0.0, ..Default::default() };

    let exact = Calculator::default().calculate(&params).unwrap();
    assert!(exact.return_loss_db.is_finite());

    let clamped = Calculator::new(CalculatorConfig {
        min_reflection_magnitude: 1e-9,
        ..Default::default()
    })
    .calculate(&params)
    .unwrap();
    assert_eq!(clamped.return_loss_db, f64::INFINITY);
}

#[test]
fn high_frequency_long_line_terminates() {
    let r = Calculator::default()
        .calculate(&LineParameters { frequency: 10e9, length: 30.0, ..Default::default() })
        .unwrap();
    // λ ≈ 3 cm, so roughly 2000 maxima
    assert!(r.voltage_max_positions.len() > 1990 && r.voltage_max_positions.len() < 2010);
}

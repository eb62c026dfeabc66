use approx::assert_relative_eq;
use feyn_geometry::curve::{BezierSpec, Endpoint, LoopSpec};
use feyn_geometry::overlay::{HelixParams, WaveParams, ZigzagParams};
use feyn_geometry::{synthesize, BaseSpec, BoundaryPhase, GeneratedPath, LineStyle};
use feyn_math::arc::path_length;
use feyn_math::dvec2;

fn straight_line(length: f64, samples: usize) -> BaseSpec {
    BaseSpec::Open(
        BezierSpec::new(
            Endpoint::new(dvec2(0.0, 0.0), 0.0),
            Endpoint::new(dvec2(length, 0.0), 180.0),
            0.3,
        )
        .with_sample_count(samples),
    )
}

fn self_loop(samples: usize) -> BaseSpec {
    BaseSpec::Loop(LoopSpec::new(dvec2(0.0, 0.0), 90.0, 2.0, 1.0).with_sample_count(samples))
}

#[test]
fn test_scenario_flat_bezier_endpoint_fidelity() {
    // Endpoints (0,0) and (4,0) with interior-pointing tangents, 100 samples
    let path = synthesize(&straight_line(4.0, 100), &LineStyle::Fermion).unwrap();
    let outline = path.outline();
    assert_eq!(outline.len(), 100);
    assert_relative_eq!(outline[0].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(outline[0].y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(outline[99].x, 4.0, epsilon = 1e-9);
    assert_relative_eq!(outline[99].y, 0.0, epsilon = 1e-9);
    for w in outline.windows(2) {
        assert!(w[1].x > w[0].x, "path not monotonically increasing in x");
    }
}

#[test]
fn test_scenario_wave_even_half_cycles() {
    // Arc length ~4, nominal wavelength 1, equal phases: an even count of
    // half-cycles near 8, zero displacement at both ends
    let params = WaveParams {
        amplitude: 0.5,
        wavelength: 1.0,
        initial_phase: BoundaryPhase::Zero,
        final_phase: BoundaryPhase::Zero,
    };
    let path = synthesize(&straight_line(4.0, 2001), &LineStyle::Photon(params)).unwrap();
    let outline = path.outline();
    assert!(outline[0].y.abs() < 1e-9);
    assert!(outline[outline.len() - 1].y.abs() < 1e-6);

    // Count zero crossings of the displacement: 8 half-cycles leave 7
    // interior crossings plus the two boundary zeros
    let crossings = outline
        .windows(2)
        .filter(|w| w[0].y.signum() != w[1].y.signum() && w[0].y != 0.0)
        .count();
    assert!(
        (7..=9).contains(&crossings),
        "expected ~8 half-cycles, saw {crossings} interior sign changes"
    );
}

#[test]
fn test_scenario_helix_straight_carrier() {
    // Straight base of length 10, radius 1, 3 cycles, speed 2
    let params = HelixParams {
        radius: 1.0,
        cycles: 3.0,
        speed: 2.0,
    };
    let path = synthesize(&straight_line(10.0, 2001), &LineStyle::Gluon(params)).unwrap();
    let GeneratedPath::Helix(helix) = path else {
        panic!("gluon must produce a helix");
    };
    // Carrier truncated one radius in from each end
    assert!((helix.carrier[0].x - 1.0).abs() < 0.05);
    assert!((helix.carrier[helix.carrier.len() - 1].x - 9.0).abs() < 0.05);
    // Coil point stays on the radius tube the whole sweep
    for (c, d) in helix.carrier.iter().zip(&helix.coil) {
        assert_relative_eq!((*d - *c).length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_wave_phase_grid_on_loop() {
    for (initial, terminal) in [
        (BoundaryPhase::Zero, BoundaryPhase::Zero),
        (BoundaryPhase::Zero, BoundaryPhase::Half),
        (BoundaryPhase::Half, BoundaryPhase::Zero),
        (BoundaryPhase::Half, BoundaryPhase::Half),
    ] {
        let params = WaveParams {
            amplitude: 0.1,
            wavelength: 0.5,
            initial_phase: initial,
            final_phase: terminal,
        };
        let spec = self_loop(2000);
        let displaced = synthesize(&spec, &LineStyle::Photon(params)).unwrap();
        let base = spec.build().unwrap();
        // Boundary samples stay on the base curve for every combination
        let first_dev = (displaced.outline()[0] - base.points()[0]).length();
        let last_dev =
            (displaced.outline()[1999] - base.points()[1999]).length();
        assert!(first_dev < 1e-6, "({initial:?},{terminal:?}): {first_dev}");
        assert!(last_dev < 1e-4, "({initial:?},{terminal:?}): {last_dev}");
    }
}

#[test]
fn test_zigzag_phase_grid() {
    for (initial, terminal) in [
        (BoundaryPhase::Zero, BoundaryPhase::Zero),
        (BoundaryPhase::Zero, BoundaryPhase::Half),
        (BoundaryPhase::Half, BoundaryPhase::Zero),
        (BoundaryPhase::Half, BoundaryPhase::Half),
    ] {
        let params = ZigzagParams {
            amplitude: 0.2,
            frequency: 2.0,
            initial_phase: initial,
            final_phase: terminal,
        };
        let path = synthesize(&straight_line(5.0, 2001), &LineStyle::WZ(params)).unwrap();
        let outline = path.outline();
        assert!(outline[0].y.abs() < 1e-9);
        assert!(outline[outline.len() - 1].y.abs() < 1e-3);
    }
}

#[test]
fn test_loop_resampling_uniform_and_length_preserving() {
    let spec = self_loop(400);
    let base = spec.build().unwrap();
    let spacings: Vec<f64> = base
        .points()
        .windows(2)
        .map(|w| (w[1] - w[0]).length())
        .collect();
    let mean = spacings.iter().sum::<f64>() / spacings.len() as f64;
    let std = (spacings.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
        / spacings.len() as f64)
        .sqrt();
    assert!(std < 0.05 * mean, "spacing stddev {std} vs mean {mean}");

    // Ramanujan approximation for the ellipse circumference (a=2, b=1)
    let (a, b) = (2.0_f64, 1.0_f64);
    let h = ((a - b) / (a + b)).powi(2);
    let circumference =
        std::f64::consts::PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));
    let sampled = path_length(base.points());
    assert!((sampled - circumference).abs() / circumference < 0.01);
}

#[test]
fn test_synthesis_is_deterministic() {
    let spec = straight_line(6.0, 800);
    let style = LineStyle::Photon(WaveParams::default());
    let a = synthesize(&spec, &style).unwrap();
    let b = synthesize(&spec, &style).unwrap();
    assert_eq!(a.outline(), b.outline());
}

#[test]
fn test_gluon_on_loop() {
    let params = HelixParams {
        radius: 0.3,
        cycles: 12.0,
        speed: 4.0,
    };
    let path = synthesize(&self_loop(2000), &LineStyle::Gluon(params)).unwrap();
    let GeneratedPath::Helix(helix) = path else {
        panic!("gluon must produce a helix");
    };
    assert_eq!(helix.carrier.len(), helix.coil.len());
    assert!(path_length(&helix.coil) > path_length(&helix.carrier));
}

#[test]
fn test_wave_on_loop_stays_near_base() {
    let params = WaveParams {
        amplitude: 0.1,
        wavelength: 0.5,
        initial_phase: BoundaryPhase::Zero,
        final_phase: BoundaryPhase::Zero,
    };
    let spec = self_loop(2000);
    let displaced = synthesize(&spec, &LineStyle::Photon(params)).unwrap();
    let base = spec.build().unwrap();
    for (d, b) in displaced.outline().iter().zip(base.points()) {
        assert!((*d - *b).length() <= 0.1 + 1e-9);
    }
}

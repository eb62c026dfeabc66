//! W/Z-boson triangular zigzag overlay.

use feyn_core::Tolerance;
use feyn_math::Point2;
use serde::{Deserialize, Serialize};

use super::BasePath;
use crate::phase::{matched_frequency, BoundaryPhase};

/// Parameters for the triangular (W/Z) overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZigzagParams {
    pub amplitude: f64,
    /// Nominal cycles per unit arc length; adjusted per path so the
    /// boundary phases land.
    pub frequency: f64,
    pub initial_phase: BoundaryPhase,
    pub final_phase: BoundaryPhase,
}

impl Default for ZigzagParams {
    fn default() -> Self {
        Self {
            amplitude: 0.2,
            frequency: 2.0,
            initial_phase: BoundaryPhase::Zero,
            final_phase: BoundaryPhase::Zero,
        }
    }
}

/// Triangular waveform at arc position `s`: rising through the first
/// quarter period, falling through the middle half, rising again through
/// the final quarter. `start_up` mirrors the whole waveform.
fn triangle_wave(amplitude: f64, wavelength: f64, s: f64, start_up: bool) -> f64 {
    if amplitude == 0.0 || wavelength == 0.0 {
        return 0.0;
    }
    let phase = (s / wavelength).rem_euclid(1.0);
    let value = if phase < 0.25 {
        amplitude * phase * 4.0
    } else if phase < 0.5 {
        amplitude * (1.0 - (phase - 0.25) * 4.0)
    } else if phase < 0.75 {
        -amplitude * (phase - 0.5) * 4.0
    } else {
        -amplitude * (1.0 - (phase - 0.75) * 4.0)
    };
    if start_up {
        value
    } else {
        -value
    }
}

/// Displace the base path along its normals by a phase-matched triangle
/// wave.
///
/// A non-positive nominal frequency falls back to a single wavelength
/// spanning the whole path; a near-zero-length base path yields the
/// undisplaced base curve.
pub fn synthesize_zigzag(base: &BasePath, params: &ZigzagParams, tol: Tolerance) -> Vec<Point2> {
    let total = base.total_length();
    if tol.is_zero(total) {
        return base.points().to_vec();
    }
    let wavelength = if params.frequency > 0.0 {
        1.0 / matched_frequency(
            total,
            params.frequency,
            params.initial_phase,
            params.final_phase,
            tol,
        )
    } else {
        total
    };
    let start_up = params.initial_phase.starts_up();
    base.displaced_by(|s| triangle_wave(params.amplitude, wavelength, s, start_up))
}

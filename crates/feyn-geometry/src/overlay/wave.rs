//! Photon-style sinusoidal overlay.

use std::f64::consts::PI;

use feyn_core::Tolerance;
use feyn_math::Point2;
use serde::{Deserialize, Serialize};

use super::BasePath;
use crate::phase::{matched_wavelength, BoundaryPhase};

/// Parameters for the sinusoidal (photon) overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveParams {
    pub amplitude: f64,
    /// Nominal wavelength; adjusted per path so the boundary phases land.
    pub wavelength: f64,
    pub initial_phase: BoundaryPhase,
    pub final_phase: BoundaryPhase,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            wavelength: 0.5,
            initial_phase: BoundaryPhase::Zero,
            final_phase: BoundaryPhase::Zero,
        }
    }
}

/// Displace the base path along its normals by a phase-matched sine.
///
/// A non-positive nominal wavelength or a near-zero-length base path yields
/// the undisplaced base curve.
pub fn synthesize_wave(base: &BasePath, params: &WaveParams, tol: Tolerance) -> Vec<Point2> {
    let total = base.total_length();
    if params.wavelength <= 0.0 || tol.is_zero(total) {
        return base.points().to_vec();
    }
    let wavelength = matched_wavelength(
        total,
        params.wavelength,
        params.initial_phase,
        params.final_phase,
        tol,
    );
    let phase0 = params.initial_phase.radians();
    base.displaced_by(|s| params.amplitude * (2.0 * PI * s / wavelength + phase0).sin())
}

//! Gluon-style rotating-point helix overlay.
//!
//! The coil is traced by a point rotating at fixed radius around a carrier
//! that travels along the base curve. The carrier is first truncated to the
//! segment between the two points where the base path crosses a circle of
//! the coil radius around each endpoint, so the coil starts and ends
//! exactly on those circles.

use std::f64::consts::PI;

use feyn_core::{FeynError, Result, Tolerance};
use feyn_math::arc::{nearest_pair_at_radius, nearest_point_at_radius, path_length, RadiusLock};
use feyn_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::BasePath;

/// Parameters for the helical (gluon) overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HelixParams {
    /// Coil radius; also the lock-on circle radius at each endpoint.
    pub radius: f64,
    /// Whole turns added on top of the lock-on angular difference.
    pub cycles: f64,
    /// Carrier speed along the truncated path.
    pub speed: f64,
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 0.18,
            cycles: 18.0,
            speed: 5.0,
        }
    }
}

/// Truncated carrier path plus the coil trajectory swept along it.
#[derive(Debug, Clone)]
pub struct HelixPath {
    pub carrier: Vec<Point2>,
    pub coil: Vec<Point2>,
}

fn radius_locks(
    path: &[Point2],
    radius: f64,
    closed: bool,
) -> Result<(RadiusLock, RadiusLock)> {
    let (entry, exit) = if closed {
        nearest_pair_at_radius(path[0], radius, path)?
    } else {
        let entry = nearest_point_at_radius(path[0], radius, path)?;
        let exit = nearest_point_at_radius(path[path.len() - 1], radius, path)?;
        (entry, exit)
    };
    if entry.index > exit.index {
        return Err(FeynError::InvalidGeometry(format!(
            "radius lock-on is not monotonic: start index {} exceeds end index {}",
            entry.index, exit.index
        )));
    }
    Ok((entry, exit))
}

/// Truncate a base path to the segment between its two radius lock-on
/// points, without sweeping a coil. Used to render the inner carrier line
/// of a gluon.
pub fn truncate_to_radius(base: &BasePath, radius: f64) -> Result<Vec<Point2>> {
    let (entry, exit) = radius_locks(base.points(), radius, base.is_closed())?;
    Ok(base.points()[entry.index..=exit.index].to_vec())
}

/// Sweep the rotating coil point along the truncated carrier.
///
/// The total rotation is `2π * cycles` plus the angular difference between
/// the two lock-on radial vectors, spread uniformly over the carrier's
/// travel time at the given speed.
pub fn synthesize_helix(
    base: &BasePath,
    params: &HelixParams,
    tol: Tolerance,
) -> Result<HelixPath> {
    let (entry, exit) = radius_locks(base.points(), params.radius, base.is_closed())?;
    let carrier: Vec<Point2> = base.points()[entry.index..=exit.index].to_vec();

    let start_angle = entry.to_center.y.atan2(entry.to_center.x);
    let end_angle = exit.to_center.y.atan2(exit.to_center.x);

    let length = path_length(&carrier);
    if tol.is_zero(length) || tol.is_zero(params.speed) {
        return Err(FeynError::InvalidGeometry(format!(
            "cannot sweep helix: carrier length {length} at speed {}",
            params.speed
        )));
    }

    let total_phase = 2.0 * PI * params.cycles + (end_angle - start_angle);
    let total_time = length / params.speed;
    let omega = total_phase / total_time;
    let dt = if carrier.len() > 1 {
        total_time / (carrier.len() - 1) as f64
    } else {
        0.0
    };

    let coil = carrier
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let angle = start_angle + omega * i as f64 * dt;
            c + params.radius * Vector2::new(angle.cos(), angle.sin())
        })
        .collect();

    Ok(HelixPath { carrier, coil })
}

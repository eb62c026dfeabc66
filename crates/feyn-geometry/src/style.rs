//! Tagged particle-style parameters and the synthesis entry point.
//!
//! Style parameters are resolved to concrete values when a variant is
//! constructed, at the data-model boundary; the generators never fall back
//! to defaults internally.

use feyn_core::{Result, Tolerance};
use feyn_math::Point2;
use serde::{Deserialize, Serialize};

use crate::curve::{BezierSpec, LoopSpec};
use crate::overlay::{
    synthesize_fermion, synthesize_helix, synthesize_wave, synthesize_zigzag, BasePath,
    HelixParams, HelixPath, WaveParams, ZigzagParams,
};

/// Base-curve specification: an open Bezier line or a closed self-loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BaseSpec {
    Open(BezierSpec),
    Loop(LoopSpec),
}

impl BaseSpec {
    pub fn build(&self) -> Result<BasePath> {
        match self {
            BaseSpec::Open(spec) => BasePath::from_bezier(spec),
            BaseSpec::Loop(spec) => BasePath::from_loop(spec),
        }
    }
}

/// Particle-style parameter union.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LineStyle {
    Fermion,
    Photon(WaveParams),
    WZ(ZigzagParams),
    Gluon(HelixParams),
}

/// Final renderable output of one synthesis call.
#[derive(Debug, Clone)]
pub enum GeneratedPath {
    /// A single displaced (or plain) polyline
    Line(Vec<Point2>),
    /// Gluon output: truncated carrier plus the coil trajectory
    Helix(HelixPath),
}

impl GeneratedPath {
    /// The polyline a renderer draws: the coil for a gluon, the path
    /// itself otherwise.
    pub fn outline(&self) -> &[Point2] {
        match self {
            GeneratedPath::Line(points) => points,
            GeneratedPath::Helix(helix) => &helix.coil,
        }
    }
}

/// Build the base curve once and dispatch to the style's generator.
///
/// Pure and stateless: identical inputs produce identical output paths.
pub fn synthesize(base: &BaseSpec, style: &LineStyle) -> Result<GeneratedPath> {
    let tol = Tolerance::default_precision();
    let path = base.build()?;
    Ok(match style {
        LineStyle::Fermion => GeneratedPath::Line(synthesize_fermion(&path)),
        LineStyle::Photon(params) => GeneratedPath::Line(synthesize_wave(&path, params, tol)),
        LineStyle::WZ(params) => GeneratedPath::Line(synthesize_zigzag(&path, params, tol)),
        LineStyle::Gluon(params) => GeneratedPath::Helix(synthesize_helix(&path, params, tol)?),
    })
}

// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Circular arcs for pattern construction: endpoints, segmented cubic
//! approximation and cutting.

pub mod angle;
mod arc;
pub mod cli;
pub mod config;
mod error;
pub mod gobject;
mod point;
pub mod spline;
pub mod svg;

pub use arc::{Arc, ArcPath, SegmentBounds};
pub use error::{ArcError, ArcResult};
pub use gobject::{DrawMode, GObject, ObjectKind};
pub use point::LabeledPoint;
pub use spline::{CubicArcFit, CurveFit, FitScale};

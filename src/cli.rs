// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Command line front ends for inspecting arcs.

use clap::{Args, Parser};

use crate::arc::Arc;
use crate::config::DEFAULT_TOLERANCE;
use crate::error::ArcResult;
use crate::gobject::GObject;
use crate::point::LabeledPoint;
use crate::spline::CubicArcFit;

/// An arc given on the command line.
#[derive(Args, Clone, Debug)]
pub struct ArcArgs {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cx: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cy: f64,
    #[arg(short, long)]
    pub radius: f64,
    /// Start angle in degrees, counter-clockwise from +x.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub f1: f64,
    /// End angle in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub f2: f64,
    #[arg(long, default_value = "A")]
    pub center_name: String,
    /// Distance tolerance for curve sampling.
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

impl ArcArgs {
    pub fn to_arc(&self) -> ArcResult<Arc> {
        let center = LabeledPoint::new(self.center_name.clone(), self.cx, self.cy);
        Arc::new(center, self.radius, self.f1, self.f2)
    }
}

fn print_arc(arc: &Arc) {
    let (p1, p2) = (arc.p1(), arc.p2());
    println!("{}: {} -> {} degrees", arc.name(), arc.f1(), arc.f2());
    println!("  p1 = ({:.4}, {:.4})", p1.x, p1.y);
    println!("  p2 = ({:.4}, {:.4})", p2.x, p2.y);
    println!("  sweep = {:.4}, length = {:.4}", arc.sweep_angle(), arc.length());
    match arc.segment_count() {
        Ok(n) => println!("  segments = {n}"),
        Err(e) => println!("  segments: {e}"),
    }
}

pub fn info_main(args: ArcArgs) -> anyhow::Result<()> {
    print_arc(&args.to_arc()?);
    Ok(())
}

pub fn points_main(args: ArcArgs) -> anyhow::Result<()> {
    let arc = args.to_arc()?;
    for p in arc.points_with(&CubicArcFit::new(args.tolerance))? {
        println!("{} {}", p.x, p.y);
    }
    Ok(())
}

#[derive(Parser)]
pub struct CutArgs {
    #[command(flatten)]
    pub arc: ArcArgs,
    /// Distance along the arc from its start.
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: f64,
}

pub fn cut_main(args: CutArgs) -> anyhow::Result<()> {
    let arc = args.arc.to_arc()?;
    let (p, arc1, arc2) = arc.cut_arc(args.length);
    println!("cut = ({:.4}, {:.4})", p.x, p.y);
    print_arc(&arc1);
    print_arc(&arc2);
    Ok(())
}

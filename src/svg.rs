// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! A very basic SVG dump of an arc, its approximation and a cut.

use std::fs::File;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape};
use log::info;

use crate::arc::Arc;
use crate::cli::ArcArgs;
use crate::error::ArcResult;
use crate::spline::CubicArcFit;

pub struct StyledPath {
    pub path: BezPath,
    pub stroke: &'static str,
    /// Pixels, independent of the drawing scale.
    pub width: f64,
}

pub struct SvgScene {
    pub paths: Vec<StyledPath>,
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

impl SvgScene {
    /// The arc as one sweep, its segment approximation with the segment
    /// boundaries marked, and optionally both halves of a cut.
    pub fn from_arc(arc: &Arc, tolerance: f64, cut: Option<f64>) -> ArcResult<SvgScene> {
        let mut scene = SvgScene { paths: vec![] };
        let marker = 0.02 * arc.radius();
        scene.push(arc.to_bez_path(tolerance), "black", 2.0);
        let points = arc.points_with(&CubicArcFit::new(tolerance))?;
        scene.push(polyline(&points), "steelblue", 1.0);
        for (start, _) in arc.segment_bounds()? {
            let c = Circle::new(arc.boundary_point(start), marker);
            scene.push(c.to_path(tolerance), "steelblue", 1.0);
        }
        if let Some(length) = cut {
            let (p, arc1, arc2) = arc.cut_arc(length);
            scene.push(arc1.to_bez_path(tolerance), "crimson", 1.5);
            scene.push(arc2.to_bez_path(tolerance), "seagreen", 1.5);
            scene.push(Circle::new(p, 2.0 * marker).to_path(tolerance), "crimson", 1.0);
        }
        Ok(scene)
    }

    pub fn push(&mut self, path: BezPath, stroke: &'static str, width: f64) {
        self.paths.push(StyledPath {
            path,
            stroke,
            width,
        });
    }

    pub fn bounds(&self) -> Rect {
        self.paths
            .iter()
            .map(|p| p.path.bounding_box())
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }

    /// Write a standalone SVG document.
    ///
    /// Pattern space has y up, so everything is flipped on the way out.
    pub fn write_svg(&self, out: &mut impl Write) -> io::Result<()> {
        let b = self.bounds();
        let margin = 0.05 * b.width().max(b.height()).max(1.0);
        let view = Rect::new(b.x0, -b.y1, b.x1, -b.y0).inflate(margin, margin);
        writeln!(
            out,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            view.x0,
            view.y0,
            view.width(),
            view.height()
        )?;
        for path in &self.paths {
            let mut p = path.path.clone();
            p.apply_affine(Affine::FLIP_Y);
            writeln!(
                out,
                "  <path d='{}' fill='none' stroke='{}' stroke-width='{}' vector-effect='non-scaling-stroke' />",
                p.to_svg(),
                path.stroke,
                path.width
            )?;
        }
        writeln!(out, "</svg>")?;
        Ok(())
    }
}

#[derive(Parser)]
pub struct SvgArgs {
    #[command(flatten)]
    pub arc: ArcArgs,
    /// Also cut the arc this far along it and draw both halves.
    #[arg(long)]
    pub cut: Option<f64>,
    #[arg(short, long)]
    pub output_file: Option<String>,
}

pub fn svg_main(args: SvgArgs) -> anyhow::Result<()> {
    let arc = args.arc.to_arc()?;
    let scene = SvgScene::from_arc(&arc, args.arc.tolerance, args.cut)?;
    match args.output_file {
        Some(name) => {
            let mut f = File::create(&name).with_context(|| format!("creating {name}"))?;
            scene.write_svg(&mut f)?;
            info!("wrote {} paths to {name}", scene.paths.len());
        }
        None => scene.write_svg(&mut io::stdout().lock())?,
    }
    Ok(())
}

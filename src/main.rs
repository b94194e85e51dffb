// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};

use pattern_arc::cli::{cut_main, info_main, points_main, ArcArgs, CutArgs};
use pattern_arc::svg::{svg_main, SvgArgs};

#[derive(Parser)]
#[command(version, about = "Inspect, approximate and cut circular arcs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Endpoints, sweep, length and segment count.
    Info(ArcArgs),
    /// The approximated point sequence, one `x y` per line.
    Points(ArcArgs),
    /// Split the arc at a distance along it.
    Cut(CutArgs),
    /// Draw the arc, its approximation and an optional cut as SVG.
    Svg(SvgArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Info(args) => info_main(args),
        Command::Points(args) => points_main(args),
        Command::Cut(args) => cut_main(args),
        Command::Svg(args) => svg_main(args),
    }
}

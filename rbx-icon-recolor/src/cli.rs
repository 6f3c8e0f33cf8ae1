use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use recolr::color::ColorRgb24;

use crate::bootstrapper::Bootstrapper;

#[derive(Debug, Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Font file, or directory of fonts, to recolor
    #[arg(long)]
    pub path: PathBuf,
    /// Target color as six hex digits, e.g. FF0000
    #[arg(long)]
    pub color: ColorRgb24,
    /// Bootstrapper whose mod folder receives the recolored fonts
    #[arg(long, ignore_case = true)]
    pub bootstrapper: Option<Bootstrapper>,
    /// Mod profile subfolder, honored by bootstrappers with profile support
    #[arg(long)]
    pub mod_name: Option<String>,
}

/// Parses the cli arguments
pub fn init_cli() -> anyhow::Result<CliArgs> {
    let mut args = CliArgs::try_parse().context("Failed to parse CLI arguments")?;

    if args.bootstrapper.is_none() {
        args.bootstrapper = Bootstrapper::default_for_platform();
    }

    Ok(args)
}

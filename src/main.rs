// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Placemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Placemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Placemark CLI entrypoint.
//!
//! `cluster` groups a marker file the way the map renders it; `place` resolves a floating panel
//! position. Both print JSON on stdout. Set `RUST_LOG` for diagnostics on stderr.

use std::fmt;
use std::io;
use std::path::PathBuf;

use placemark::api::{self, ApiError};
use placemark::cluster::cluster_markers;
use placemark::config::{ConfigError, PlacemarkConfig};
use placemark::model::{Marker, MarkerFootprint, ScreenPoint, Size};
use placemark::placement::{clamp_panel, PanelKind, PlacementContext};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <path>] cluster <markers.json>\n  {program} [--config <path>] place --viewport <W>x<H> --at <X>,<Y> [--panel <W>x<H>] [--marker <X>,<Y>,<W>,<H>] [--kind detail|list]\n\n`cluster` reads a JSON array of markers (or a `{{\"success\":true,\"data\":[...]}}` envelope) and prints cluster descriptors.\n`place` prints the resolved top-left corner of a panel opening at --at. --panel overrides the size implied by --kind (default detail).\n--config points at a JSON file overriding panel, search, timing and map defaults."
    );
}

#[derive(Debug, Clone, PartialEq)]
struct PlaceArgs {
    viewport: Size,
    at: ScreenPoint,
    panel: Option<Size>,
    marker: Option<MarkerFootprint>,
    kind: PanelKind,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Cluster { input: String },
    Place(PlaceArgs),
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    config: Option<String>,
    command: Command,
}

fn parse_size(raw: &str) -> Result<Size, ()> {
    let (width, height) = raw.split_once('x').ok_or(())?;
    let width: f64 = width.trim().parse().map_err(|_| ())?;
    let height: f64 = height.trim().parse().map_err(|_| ())?;
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(());
    }
    Ok(Size::new(width, height))
}

fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], ()> {
    let mut values = [0.0_f64; N];
    let mut parts = raw.split(',');
    for value in &mut values {
        let part = parts.next().ok_or(())?;
        *value = part.trim().parse().map_err(|_| ())?;
        if !value.is_finite() {
            return Err(());
        }
    }
    if parts.next().is_some() {
        return Err(());
    }
    Ok(values)
}

fn parse_place(mut args: impl Iterator<Item = String>) -> Result<PlaceArgs, ()> {
    let mut viewport = None;
    let mut at = None;
    let mut panel = None;
    let mut marker = None;
    let mut kind = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--viewport" => {
                if viewport.is_some() {
                    return Err(());
                }
                viewport = Some(parse_size(&args.next().ok_or(())?)?);
            }
            "--at" => {
                if at.is_some() {
                    return Err(());
                }
                let [x, y] = parse_numbers::<2>(&args.next().ok_or(())?)?;
                at = Some(ScreenPoint::new(x, y));
            }
            "--panel" => {
                if panel.is_some() {
                    return Err(());
                }
                panel = Some(parse_size(&args.next().ok_or(())?)?);
            }
            "--marker" => {
                if marker.is_some() {
                    return Err(());
                }
                let [x, y, w, h] = parse_numbers::<4>(&args.next().ok_or(())?)?;
                marker = Some(MarkerFootprint::new(x, y, w, h));
            }
            "--kind" => {
                if kind.is_some() {
                    return Err(());
                }
                kind = Some(match args.next().ok_or(())?.as_str() {
                    "detail" => PanelKind::Detail,
                    "list" => PanelKind::List,
                    _ => return Err(()),
                });
            }
            _ => return Err(()),
        }
    }

    Ok(PlaceArgs {
        viewport: viewport.ok_or(())?,
        at: at.ok_or(())?,
        panel,
        marker,
        kind: kind.unwrap_or(PanelKind::Detail),
    })
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if config.is_some() {
                    return Err(());
                }
                config = Some(args.next().ok_or(())?);
            }
            "cluster" => {
                let input = args.next().ok_or(())?;
                if input.starts_with('-') || args.next().is_some() {
                    return Err(());
                }
                return Ok(CliOptions { config, command: Command::Cluster { input } });
            }
            "place" => {
                let place = parse_place(args)?;
                return Ok(CliOptions { config, command: Command::Place(place) });
            }
            _ => return Err(()),
        }
    }

    Err(())
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Read { path: PathBuf, source: io::Error },
    Markers { path: PathBuf, source: ApiError },
    Encode(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Read { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Markers { path, source } => {
                write!(f, "invalid marker file {}: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode output: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Read { source, .. } => Some(source),
            Self::Markers { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

fn load_config(path: Option<&str>) -> Result<PlacemarkConfig, CliError> {
    match path {
        Some(path) => PlacemarkConfig::load(path).map_err(CliError::Config),
        None => Ok(PlacemarkConfig::default()),
    }
}

/// Accepts a bare marker array or a backend response envelope.
fn decode_markers(raw: &str) -> Result<Vec<Marker>, ApiError> {
    if raw.trim_start().starts_with('{') {
        api::decode_response(raw)
    } else {
        Ok(serde_json::from_str(raw)?)
    }
}

fn run_cluster(input: &str) -> Result<String, CliError> {
    let path = PathBuf::from(input);
    let raw = std::fs::read_to_string(&path)
        .map_err(|source| CliError::Read { path: path.clone(), source })?;
    let markers =
        decode_markers(&raw).map_err(|source| CliError::Markers { path: path.clone(), source })?;
    let clusters = cluster_markers(&markers);
    log::info!("{} markers in {} clusters", markers.len(), clusters.len());
    serde_json::to_string_pretty(&clusters).map_err(CliError::Encode)
}

fn run_place(args: &PlaceArgs, config: &PlacemarkConfig) -> Result<String, CliError> {
    let dims = &config.panel;
    let panel = args.panel.unwrap_or_else(|| args.kind.size(dims));
    let ctx = PlacementContext::new(args.viewport, dims).with_marker(args.marker);
    let position = clamp_panel(args.at, panel, &ctx);
    log::debug!("placed {panel:?} at {position:?} (wanted {:?})", args.at);
    serde_json::to_string(&position).map_err(CliError::Encode)
}

fn run(options: &CliOptions) -> Result<String, CliError> {
    let config = load_config(options.config.as_deref())?;
    match &options.command {
        Command::Cluster { input } => run_cluster(input),
        Command::Place(args) => run_place(args, &config),
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "placemark".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    match run(&options) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("placemark: {err}");
            std::process::exit(1);
        }
    }
}

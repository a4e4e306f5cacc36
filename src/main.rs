// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyphlab CLI: load a glyph, transform it, export it.
//!
//! This is the headless shell around the editor core: it drives the
//! same `AppState` a GUI would, then writes the requested exports.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use glyphlab::data::AppState;
use glyphlab::export::{png, svg};
use glyphlab::settings;
use glyphlab::transform::TransformParams;

/// Edit and export a single typeface glyph
#[derive(Parser, Debug)]
#[command(name = "glyphlab", version, about)]
struct Args {
    /// TTF/OTF font file to load; omit to use the built-in placeholder
    #[arg(long)]
    font: Option<PathBuf>,

    /// Character to generate
    #[arg(long = "char", default_value = "A")]
    character: char,

    /// JSON file with transform params (width/height/weight/slant/roundness)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Randomize the outline with this seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write an SVG export to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write a PNG export to this path
    #[arg(long)]
    png: Option<PathBuf>,

    /// Edge length of the PNG raster in pixels
    #[arg(long, default_value_t = settings::export::PNG_SIZE_PX)]
    png_size: u32,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber (controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut state = AppState::new(args.character);

    if let Some(font_path) = &args.font {
        let data = std::fs::read(font_path)
            .with_context(|| format!("failed to read {}", font_path.display()))?;
        state.load_font(data);
        if let Some(message) = &state.error_message {
            // Unparsable font is not fatal: report and continue on the
            // placeholder outline, like the editor does.
            tracing::error!("{message}");
        }
    }

    if let Some(params_path) = &args.params {
        let params = read_params(params_path)?;
        state.session.set_params(params);
    }

    if let Some(seed) = args.seed {
        state.session.randomize(seed);
    }

    if let Some(svg_path) = &args.svg {
        let document = svg::write_document(&state.session.path);
        std::fs::write(svg_path, document)
            .with_context(|| format!("failed to write {}", svg_path.display()))?;
        tracing::info!("wrote {}", svg_path.display());
    }

    if let Some(png_path) = &args.png {
        let weight = state.session.params().weight;
        let bytes = png::rasterize(&state.session.path, weight, args.png_size)?;
        std::fs::write(png_path, bytes)
            .with_context(|| format!("failed to write {}", png_path.display()))?;
        tracing::info!("wrote {}", png_path.display());
    }

    Ok(())
}

/// Load transform params from a JSON file
fn read_params(path: &PathBuf) -> Result<TransformParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let params: TransformParams =
        serde_json::from_str(&text).with_context(|| format!("invalid params in {}", path.display()))?;
    Ok(params.clamped())
}

//! Subcommand implementations.

use std::path::Path;

use anyhow::{bail, Context, Result};
use cartpolar_core::encode::{encode_image, OutputFormat};
use cartpolar_core::transform::{to_cartesian_with, to_polar_with, WarpOptions};
use cartpolar_core::{click_to_center, compute_radius, decode, pattern, Point, RgbBuffer};
use tracing::{debug, info};

use crate::args::{Command, WarpArgs};
use crate::config::Config;

pub fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Polar {
            input,
            output,
            center,
            click,
            label,
            warp,
        } => {
            let click = click.zip(label);
            polar(&input, &output, center, click, &warp, config)
        }
        Command::Cartesian {
            input,
            output,
            shape,
            warp,
        } => cartesian(&input, &output, shape, &warp, config),
        Command::Rings { output, size } => rings(&output, size, config),
        Command::Radius {
            width,
            height,
            cx,
            cy,
        } => {
            println!("{}", compute_radius(height, width, cx, cy));
            Ok(())
        }
    }
}

/// Command-line flags take precedence over the config file.
fn resolve_options(warp: &WarpArgs, config: &Config) -> (WarpOptions, u8) {
    let mut options = config.transform;
    if let Some(fill) = warp.fill {
        options.fill = fill;
    }
    if let Some(interpolation) = warp.interpolation {
        options.interpolation = interpolation.into();
    }
    let quality = warp.quality.unwrap_or(config.output.jpeg_quality);
    (options, quality)
}

pub fn polar(
    input: &Path,
    output: &Path,
    center: Option<Point>,
    click: Option<((f64, f64), (u32, u32))>,
    warp: &WarpArgs,
    config: &Config,
) -> Result<()> {
    let (options, quality) = resolve_options(warp, config);
    let image = load(input)?;

    let center = match (center, click) {
        (Some(center), _) => center,
        (None, Some((click, label))) => {
            match click_to_center(click, label, (image.width, image.height)) {
                Some(center) => center,
                None => bail!("label size must be non-zero, got {}x{}", label.0, label.1),
            }
        }
        (None, None) => image.midpoint(),
    };
    debug!(cx = center.x, cy = center.y, "unwrap center");

    let result = to_polar_with(&image, center, &options)
        .with_context(|| format!("unwrapping {}", input.display()))?;
    save(&result, output, quality)
}

pub fn cartesian(
    input: &Path,
    output: &Path,
    shape: Option<(u32, u32)>,
    warp: &WarpArgs,
    config: &Config,
) -> Result<()> {
    let (options, quality) = resolve_options(warp, config);
    let polar = load(input)?;

    let (width, height) = shape.unwrap_or_else(|| {
        let side = polar.width.saturating_mul(2);
        (side, side)
    });

    let result = to_cartesian_with(&polar, (height, width), &options)
        .with_context(|| format!("mapping {} back to Cartesian", input.display()))?;
    save(&result, output, quality)
}

pub fn rings(output: &Path, size: u32, config: &Config) -> Result<()> {
    let image = pattern::concentric_rings(size)?;
    save(&image, output, config.output.jpeg_quality)
}

fn load(path: &Path) -> Result<RgbBuffer> {
    let image =
        decode::load_image(path).with_context(|| format!("opening {}", path.display()))?;
    info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

fn save(image: &RgbBuffer, path: &Path, jpeg_quality: u8) -> Result<()> {
    let format = OutputFormat::from_path(path, jpeg_quality)
        .with_context(|| format!("choosing a format for {}", path.display()))?;
    let bytes = encode_image(image, format)
        .with_context(|| format!("encoding {}", path.display()))?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(
        "Saved {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(())
}

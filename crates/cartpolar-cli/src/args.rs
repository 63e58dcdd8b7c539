//! Command-line arguments and their value parsers.

use std::path::PathBuf;

use cartpolar_core::transform::Interpolation;
use cartpolar_core::Point;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cartpolar")]
#[command(author, version, about = "Cartesian to polar image remapping")]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log transform details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Unwrap an image around a center into polar coordinates
    Polar {
        input: PathBuf,

        /// Output file (.png, .jpg, .jpeg or .bmp)
        #[arg(short, long)]
        output: PathBuf,

        /// Center in image pixels, e.g. 540,540 (default: image midpoint)
        #[arg(long, value_parser = parse_point, conflicts_with = "click")]
        center: Option<Point>,

        /// Click position in a display label, e.g. 250,250
        #[arg(long, value_parser = parse_click, requires = "label")]
        click: Option<(f64, f64)>,

        /// Size of the display label the click refers to, e.g. 500x500
        #[arg(long, value_parser = parse_size, requires = "click")]
        label: Option<(u32, u32)>,

        #[command(flatten)]
        warp: WarpArgs,
    },

    /// Map a polar image back to Cartesian coordinates
    Cartesian {
        input: PathBuf,

        /// Output file (.png, .jpg, .jpeg or .bmp)
        #[arg(short, long)]
        output: PathBuf,

        /// Output size, e.g. 1080x1080 (default: square of twice the input width)
        #[arg(long, value_parser = parse_size)]
        shape: Option<(u32, u32)>,

        #[command(flatten)]
        warp: WarpArgs,
    },

    /// Write the concentric ring sample image
    Rings {
        /// Output file (.png, .jpg, .jpeg or .bmp)
        #[arg(short, long)]
        output: PathBuf,

        /// Side length in pixels
        #[arg(long, default_value_t = cartpolar_core::pattern::DEFAULT_PATTERN_SIZE)]
        size: u32,
    },

    /// Print the unwrap radius for a center
    Radius {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        #[arg(long, allow_negative_numbers = true)]
        cx: i32,
        #[arg(long, allow_negative_numbers = true)]
        cy: i32,
    },
}

/// Overrides for the `[transform]` and `[output]` config sections.
#[derive(ClapArgs, Debug, Default)]
pub struct WarpArgs {
    /// Color for samples outside the source, e.g. 255,255,255
    #[arg(long, value_parser = parse_color)]
    pub fill: Option<[u8; 3]>,

    #[arg(long, value_enum)]
    pub interpolation: Option<InterpolationArg>,

    /// JPEG quality (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationArg {
    Bilinear,
    Nearest,
}

impl From<InterpolationArg> for Interpolation {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Bilinear => Interpolation::Bilinear,
            InterpolationArg::Nearest => Interpolation::Nearest,
        }
    }
}

fn split_pair<'a>(s: &'a str, sep: char) -> Result<(&'a str, &'a str), String> {
    s.split_once(sep)
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected two values separated by '{sep}', got '{s}'"))
}

pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = split_pair(s, ',')?;
    let x = x.parse().map_err(|e| format!("invalid x '{x}': {e}"))?;
    let y = y.parse().map_err(|e| format!("invalid y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

pub fn parse_click(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = split_pair(s, ',')?;
    let x = x.parse().map_err(|e| format!("invalid x '{x}': {e}"))?;
    let y = y.parse().map_err(|e| format!("invalid y '{y}': {e}"))?;
    Ok((x, y))
}

/// Parse `WIDTHxHEIGHT`.
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let lower = s.to_ascii_lowercase();
    let (w, h) = split_pair(&lower, 'x')?;
    let w: u32 = w.parse().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let h: u32 = h.parse().map_err(|e| format!("invalid height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got {w}x{h}"));
    }
    Ok((w, h))
}

pub fn parse_color(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{s}'"));
    };
    let channel = |c: &str| c.parse::<u8>().map_err(|e| format!("invalid channel '{c}': {e}"));
    Ok([channel(r)?, channel(g)?, channel(b)?])
}

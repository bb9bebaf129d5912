//! Extraction configuration and positional argument validation.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

/// One-line usage hint printed with every argument error.
pub const USAGE: &str = "Usage: fieldcast [OPTIONS] <filename> <xmin> <ymin> <xmax> <ymax> <ny>";

/// Number of positional values an extraction takes.
pub const POSITIONAL_COUNT: usize = 6;

/// Errors from validating the positional values.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentError {
    /// Wrong number of positional values.
    Count {
        /// How many were supplied.
        found: usize,
    },
    /// A value did not parse, or parsed to NaN or infinity.
    InvalidNumber {
        /// Which positional (`"xmin"`, `"ny"`, ...).
        name: &'static str,
        /// The raw text.
        value: String,
    },
    /// A maximum bound is not strictly above its minimum.
    Bounds {
        /// `'x'` or `'y'`.
        axis: char,
        /// The lower bound.
        min: f64,
        /// The upper bound.
        max: f64,
    },
    /// `ny` is not a strictly positive integer that fits in `u32`.
    Resolution {
        /// The parsed value.
        value: i64,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count { found } => {
                write!(f, "expected {POSITIONAL_COUNT} arguments, got {found}")
            }
            Self::InvalidNumber { name, value } => {
                write!(f, "{name} must be a finite number, got '{value}'")
            }
            Self::Bounds { axis, min, max } => write!(
                f,
                "bounds must satisfy {axis}max > {axis}min, got {axis}min={min} {axis}max={max}"
            ),
            Self::Resolution { value } => write!(f, "ny must be positive, got {value}"),
        }
    }
}

impl Error for ArgumentError {}

/// What to extract: the snapshot, the bounds and the y-resolution.
///
/// Constructed once, immutable afterwards. Every instance satisfies
/// `xmax > xmin`, `ymax > ymin`, finite bounds and `ny > 0`.
///
/// # Examples
///
/// ```
/// use fieldcast_extract::ExtractionConfig;
///
/// let cfg = ExtractionConfig::from_args(["snap.fcsn", "0", "0", "1", "2", "4"]).unwrap();
/// assert_eq!(cfg.ny(), 4);
/// assert_eq!(cfg.upper(), [1.0, 2.0]);
///
/// assert!(ExtractionConfig::from_args(["snap.fcsn", "0", "0", "1", "2", "0"]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionConfig {
    filename: PathBuf,
    lower: [f64; 2],
    upper: [f64; 2],
    ny: u32,
}

impl ExtractionConfig {
    /// Validate already-parsed values.
    pub fn new(
        filename: impl Into<PathBuf>,
        lower: [f64; 2],
        upper: [f64; 2],
        ny: u32,
    ) -> Result<Self, ArgumentError> {
        for (name, v) in [
            ("xmin", lower[0]),
            ("ymin", lower[1]),
            ("xmax", upper[0]),
            ("ymax", upper[1]),
        ] {
            if !v.is_finite() {
                return Err(ArgumentError::InvalidNumber {
                    name,
                    value: v.to_string(),
                });
            }
        }
        if ny == 0 {
            return Err(ArgumentError::Resolution { value: 0 });
        }
        for (axis, k) in [('x', 0), ('y', 1)] {
            if upper[k] <= lower[k] {
                return Err(ArgumentError::Bounds {
                    axis,
                    min: lower[k],
                    max: upper[k],
                });
            }
        }
        Ok(Self {
            filename: filename.into(),
            lower,
            upper,
            ny,
        })
    }

    /// Parse and validate `<filename> <xmin> <ymin> <xmax> <ymax> <ny>`.
    ///
    /// Parsing is strict: `"abc"` or `"1.5"` for `ny` is an error, not 0.
    pub fn from_args<I, S>(args: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() != POSITIONAL_COUNT {
            return Err(ArgumentError::Count { found: args.len() });
        }
        let xmin = parse_bound("xmin", args[1].as_ref())?;
        let ymin = parse_bound("ymin", args[2].as_ref())?;
        let xmax = parse_bound("xmax", args[3].as_ref())?;
        let ymax = parse_bound("ymax", args[4].as_ref())?;
        let ny = parse_resolution(args[5].as_ref())?;
        Self::new(args[0].as_ref(), [xmin, ymin], [xmax, ymax], ny)
    }

    /// Path of the snapshot to restore.
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// `[xmin, ymin]`.
    pub fn lower(&self) -> [f64; 2] {
        self.lower
    }

    /// `[xmax, ymax]`.
    pub fn upper(&self) -> [f64; 2] {
        self.upper
    }

    /// Requested number of output cells along y.
    pub fn ny(&self) -> u32 {
        self.ny
    }
}

fn parse_bound(name: &'static str, raw: &str) -> Result<f64, ArgumentError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ArgumentError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}

fn parse_resolution(raw: &str) -> Result<u32, ArgumentError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ArgumentError::InvalidNumber {
            name: "ny",
            value: raw.to_string(),
        })?;
    match u32::try_from(value) {
        Ok(ny) if ny > 0 => Ok(ny),
        _ => Err(ArgumentError::Resolution { value }),
    }
}

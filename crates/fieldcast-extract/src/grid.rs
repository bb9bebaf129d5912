//! Output grid planning.
//!
//! The user fixes `ny`; `nx` follows from the resulting cell height so
//! output cells are as close to square as the x-span allows:
//!
//! ```text
//! Δy = (ymax - ymin) / ny
//! nx = ⌊(xmax - xmin) / Δy⌋
//! Δx = (xmax - xmin) / nx
//! ```

use std::error::Error;
use std::fmt;

use crate::config::ExtractionConfig;

/// Errors from deriving the output grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The x-span is shorter than one cell height, so `nx` would be 0.
    EmptyGrid {
        /// `xmax - xmin`.
        span: f64,
        /// The cell height `Δy`.
        dy: f64,
    },
    /// `nx` or the total point count does not fit.
    TooLarge {
        /// The derived (pre-truncation) column count.
        nx: f64,
        /// Requested rows.
        ny: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { span, dy } => write!(
                f,
                "computed nx <= 0: x-span {span} is smaller than cell height {dy}; check the bounds"
            ),
            Self::TooLarge { nx, ny } => {
                write!(f, "output grid of {nx} x {ny} points is too large")
            }
        }
    }
}

impl Error for GridError {}

/// The uniform output grid an extraction samples.
///
/// # Examples
///
/// ```
/// use fieldcast_extract::{ExtractionConfig, OutputGrid};
///
/// let cfg = ExtractionConfig::new("s", [0.0, 0.0], [1.0, 2.0], 4).unwrap();
/// let grid = OutputGrid::plan(&cfg).unwrap();
/// assert_eq!((grid.nx(), grid.ny()), (2, 4));
/// assert_eq!((grid.dx(), grid.dy()), (0.5, 0.5));
/// assert_eq!(grid.x(1), 0.75);
/// assert_eq!(grid.y(3), 1.75);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OutputGrid {
    lower: [f64; 2],
    upper: [f64; 2],
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
}

impl OutputGrid {
    /// Upper bound on `nx * ny`.
    pub const MAX_POINTS: usize = u32::MAX as usize;

    /// Derive `Δy`, `nx` and `Δx` from a validated config.
    pub fn plan(cfg: &ExtractionConfig) -> Result<Self, GridError> {
        let [xmin, ymin] = cfg.lower();
        let [xmax, ymax] = cfg.upper();
        let ny = cfg.ny();

        let dy = (ymax - ymin) / ny as f64;
        let span = xmax - xmin;
        let nx_f = (span / dy).floor();

        if nx_f.is_nan() || nx_f < 1.0 {
            return Err(GridError::EmptyGrid { span, dy });
        }
        if nx_f > u32::MAX as f64 {
            return Err(GridError::TooLarge { nx: nx_f, ny });
        }
        let nx = nx_f as usize;
        match nx.checked_mul(ny as usize) {
            Some(points) if points <= Self::MAX_POINTS => {}
            _ => return Err(GridError::TooLarge { nx: nx_f, ny }),
        }
        let dx = span / nx as f64;

        Ok(Self {
            lower: [xmin, ymin],
            upper: [xmax, ymax],
            nx,
            ny: ny as usize,
            dx,
            dy,
        })
    }

    /// Columns along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Rows along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cell width.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell height.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// `[xmin, ymin]`.
    pub fn lower(&self) -> [f64; 2] {
        self.lower
    }

    /// `[xmax, ymax]`.
    pub fn upper(&self) -> [f64; 2] {
        self.upper
    }

    /// Total sample points, `nx * ny`.
    pub fn points(&self) -> usize {
        self.nx * self.ny
    }

    /// Cell-centre x of column `i`.
    pub fn x(&self, i: usize) -> f64 {
        self.dx * (i as f64 + 0.5) + self.lower[0]
    }

    /// Cell-centre y of row `j`.
    pub fn y(&self, j: usize) -> f64 {
        self.dy * (j as f64 + 0.5) + self.lower[1]
    }

    /// All cell centres, i-major then j-minor.
    pub fn centers(&self) -> impl Iterator<Item = (usize, usize, f64, f64)> + '_ {
        (0..self.nx)
            .flat_map(move |i| (0..self.ny).map(move |j| (i, j, self.x(i), self.y(j))))
    }
}

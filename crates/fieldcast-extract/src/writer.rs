//! Text row output.
//!
//! Each output point becomes one line `x y v0 v1 ...`, values in C
//! `%g` style so the output matches what plotting tools expect.

use std::io::{self, BufWriter, Write};

use crate::buffer::SampleBuffer;
use crate::grid::OutputGrid;

/// Significant digits of [`format_g`].
const PRECISION: i32 = 6;

/// Format `v` like C's `%g`: 6 significant digits, fixed or scientific
/// whichever C would pick, trailing zeros removed.
///
/// # Examples
///
/// ```
/// use fieldcast_extract::format_g;
///
/// assert_eq!(format_g(0.25), "0.25");
/// assert_eq!(format_g(-10.0), "-10");
/// assert_eq!(format_g(1e30), "1e+30");
/// assert_eq!(format_g(3.14159265), "3.14159");
/// assert_eq!(format_g(0.00001234), "1.234e-05");
/// ```
pub fn format_g(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent after rounding to PRECISION digits decides the style.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_zeros(mantissa), exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        strip_zeros(&format!("{v:.decimals$}")).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Streams output rows to any `Write` sink through a `BufWriter`.
///
/// # Examples
///
/// ```
/// use fieldcast_extract::RowWriter;
///
/// let mut out = Vec::new();
/// let mut writer = RowWriter::new(&mut out);
/// writer.write_row(0.25, 0.75, &[-10.0, 1.5]).unwrap();
/// assert_eq!(writer.rows_written(), 1);
/// writer.finish().unwrap();
/// assert_eq!(out, b"0.25 0.75 -10 1.5\n");
/// ```
pub struct RowWriter<W: Write> {
    writer: BufWriter<W>,
    line: String,
    rows_written: u64,
}

impl<W: Write> RowWriter<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            line: String::new(),
            rows_written: 0,
        }
    }

    /// Write one `x y v...` line.
    pub fn write_row(&mut self, x: f64, y: f64, values: &[f64]) -> io::Result<()> {
        self.line.clear();
        self.line.push_str(&format_g(x));
        self.line.push(' ');
        self.line.push_str(&format_g(y));
        for &v in values {
            self.line.push(' ');
            self.line.push_str(&format_g(v));
        }
        self.line.push('\n');
        self.writer.write_all(self.line.as_bytes())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write every point of `grid` from `buffer`, i-outer and j-inner.
    ///
    /// The spare slots at the end of each buffer row are never written.
    pub fn write_grid(&mut self, grid: &OutputGrid, buffer: &SampleBuffer) -> io::Result<()> {
        for (i, j, x, y) in grid.centers() {
            self.write_row(x, y, buffer.point(i, j))?;
        }
        Ok(())
    }

    /// Rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and return the inner sink.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

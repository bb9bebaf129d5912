//! Sample buffer between sampling and row output.

use std::error::Error;
use std::fmt;

/// The sample buffer could not be allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationError {
    /// Requested number of f64 slots, or `None` if the count overflowed.
    pub slots: Option<usize>,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slots {
            Some(n) => write!(f, "cannot allocate sample buffer of {n} values"),
            None => write!(f, "sample buffer size overflows"),
        }
    }
}

impl Error for AllocationError {}

/// Dense `nx` x `(ny + 1)` x `F` buffer of sampled values.
///
/// Row `i` holds `(ny + 1) * F` slots; the value of field `k` at output
/// point `(i, j)` lives at `[i][F * j + k]`. The last `F` slots of each
/// row are allocated but never sampled or written out.
///
/// # Examples
///
/// ```
/// use fieldcast_extract::SampleBuffer;
///
/// let mut buf = SampleBuffer::allocate(2, 3, 2).unwrap();
/// assert_eq!(buf.row_len(), 8);
/// buf.set(1, 2, 1, 7.5);
/// assert_eq!(buf.row(1)[2 * 2 + 1], 7.5);
/// assert_eq!(buf.point(1, 2), &[0.0, 7.5]);
/// ```
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    data: Vec<f64>,
    nx: usize,
    ny: usize,
    fields: usize,
}

impl SampleBuffer {
    /// Allocate a zeroed buffer with fallible reservation.
    pub fn allocate(nx: usize, ny: usize, fields: usize) -> Result<Self, AllocationError> {
        let slots = ny
            .checked_add(1)
            .and_then(|n| n.checked_mul(fields))
            .and_then(|n| n.checked_mul(nx))
            .ok_or(AllocationError { slots: None })?;
        let mut data = Vec::new();
        data.try_reserve_exact(slots)
            .map_err(|_| AllocationError { slots: Some(slots) })?;
        data.resize(slots, 0.0);
        Ok(Self {
            data,
            nx,
            ny,
            fields,
        })
    }

    /// Output columns along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Output rows along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Values per output point.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Slots per row, `(ny + 1) * F`.
    pub fn row_len(&self) -> usize {
        (self.ny + 1) * self.fields
    }

    /// Row `i` including its unused trailing slots.
    pub fn row(&self, i: usize) -> &[f64] {
        let len = self.row_len();
        &self.data[i * len..(i + 1) * len]
    }

    /// The `F` values sampled at `(i, j)`.
    pub fn point(&self, i: usize, j: usize) -> &[f64] {
        let start = i * self.row_len() + self.fields * j;
        &self.data[start..start + self.fields]
    }

    /// Store field `k` at `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, k: usize, v: f64) {
        let len = self.row_len();
        self.data[i * len + self.fields * j + k] = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_keeps_spare_slot_per_row() {
        let buf = SampleBuffer::allocate(3, 4, 2).unwrap();
        assert_eq!(buf.row_len(), 10);
        assert_eq!(buf.data.len(), 30);
        assert!(buf.row(2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_addresses_i_then_fj_plus_k() {
        let mut buf = SampleBuffer::allocate(2, 2, 3).unwrap();
        buf.set(0, 1, 2, 1.0);
        buf.set(1, 0, 0, 2.0);
        assert_eq!(buf.data[3 + 2], 1.0);
        assert_eq!(buf.data[9], 2.0);
        assert_eq!(buf.point(0, 1), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn overflow_and_oversize_fail_cleanly() {
        assert_eq!(
            SampleBuffer::allocate(usize::MAX, 2, 2).unwrap_err(),
            AllocationError { slots: None }
        );
        let err = SampleBuffer::allocate(1 << 40, 1 << 10, 2).unwrap_err();
        assert!(err.slots.is_some());
    }
}

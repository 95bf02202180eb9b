//! Non-owning row-major matrix views over caller-supplied buffers.
//!
//! A view is a borrow plus a shape — it never owns memory. Zero or more
//! views may alias the same arena block or any other `f32` buffer; the
//! storage has no knowledge of the views built over it.

use crate::error::GemmError;

/// A shared row-major view of `rows * cols` f32 elements.
///
/// Construction validates that the buffer length matches the shape, so
/// every `(r, c)` with `r < rows`, `c < cols` indexes inside the buffer.
/// The hot accessor [`MatrixView::at`] relies on that invariant and the
/// slice's own bounds check; [`MatrixView::get`] is the explicitly
/// checked variant for debug and test paths.
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixView<'a> {
    /// Wrap `data` as a `rows` x `cols` matrix.
    ///
    /// Fails with [`GemmError::ShapeMismatch`] unless
    /// `data.len() == rows * cols`.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Result<Self, GemmError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(GemmError::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Element at row `r`, column `c`.
    #[inline]
    pub fn at(&self, r: usize, c: usize) -> f32 {
        self.data[r * self.cols + c]
    }

    /// Bounds-checked element access.
    ///
    /// Returns `None` when `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        if r < self.rows && c < self.cols {
            Some(self.data[r * self.cols + c])
        } else {
            None
        }
    }

    /// Row `r` as a contiguous slice.
    #[inline]
    pub fn row(&self, r: usize) -> &'a [f32] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The underlying storage in row-major order.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}

/// A mutable row-major view of `rows * cols` f32 elements.
///
/// The output-side counterpart of [`MatrixView`], with the same
/// length-equals-shape invariant.
#[derive(Debug)]
pub struct MatrixViewMut<'a> {
    data: &'a mut [f32],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixViewMut<'a> {
    /// Wrap `data` as a mutable `rows` x `cols` matrix.
    ///
    /// Fails with [`GemmError::ShapeMismatch`] unless
    /// `data.len() == rows * cols`.
    pub fn new(data: &'a mut [f32], rows: usize, cols: usize) -> Result<Self, GemmError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(GemmError::ShapeMismatch {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Element at row `r`, column `c`.
    #[inline]
    pub fn at(&self, r: usize, c: usize) -> f32 {
        self.data[r * self.cols + c]
    }

    /// Mutable element at row `r`, column `c`.
    #[inline]
    pub fn at_mut(&mut self, r: usize, c: usize) -> &mut f32 {
        &mut self.data[r * self.cols + c]
    }

    /// Bounds-checked element access.
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        if r < self.rows && c < self.cols {
            Some(self.data[r * self.cols + c])
        } else {
            None
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// The underlying storage in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        self.data
    }

    /// The underlying storage, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.data
    }

    /// A shared view of the same matrix.
    pub fn as_view(&self) -> MatrixView<'_> {
        MatrixView {
            data: self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

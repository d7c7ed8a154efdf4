use crate::core::size::Size;

/// Triangular number `T(k) = k(k+1)/2`: symbols in the first `k` rows.
pub fn triangular(k: u64) -> u64 {
    k * (k + 1) / 2
}

/// Position of one symbol along the single linear pass over the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleCell {
    /// 1-based linear index in `1..=T(n)`.
    pub index: u64,
    /// 1-based row the symbol belongs to.
    pub row: u64,
    /// Whether this symbol completes its row.
    pub row_end: bool,
}

/// Walks `1..=T(n)` with one counter, closing a row each time the index
/// reaches the current row's triangular number.
#[derive(Debug, Clone)]
pub struct TriangleCells {
    index: u64,
    total: u64,
    row: u64,
}

impl TriangleCells {
    pub fn new(size: Size) -> Self {
        Self {
            index: 0,
            total: triangular(u64::from(size.get())),
            row: 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Iterator for TriangleCells {
    type Item = TriangleCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        self.index += 1;
        let row_end = self.index == triangular(self.row);
        let cell = TriangleCell {
            index: self.index,
            row: self.row,
            row_end,
        };
        if row_end {
            self.row += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.index).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

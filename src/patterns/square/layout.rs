use crate::core::size::Size;

/// Side of the anti-diagonal `i + j = m - 1` a cell falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `i + j < m`: the top-left triangle, anti-diagonal included.
    UpperLeft,
    /// `i + j >= m`: the bottom-right triangle.
    LowerRight,
}

impl Region {
    pub fn classify(size: Size, i: u64, j: u64) -> Self {
        if i + j < size.grid_dim() {
            Region::UpperLeft
        } else {
            Region::LowerRight
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Region::UpperLeft => 'U',
            Region::LowerRight => 'L',
        }
    }
}

/// Ring value of cell `(i, j)` from the two-region formula.
///
/// Upper-left cells count down from `n` by their distance to the top or
/// left edge; lower-right cells count up from the center, offset by 2.
/// Both agree with [`reference_value`] on every cell.
pub fn cell_value(size: Size, i: u64, j: u64) -> u32 {
    debug_assert!(i < size.grid_dim() && j < size.grid_dim());
    let region = Region::classify(size, i, j);
    let n = i64::from(size.get());
    let (i, j) = (i as i64, j as i64);
    let value = match region {
        Region::UpperLeft => (n - i).max(n - j),
        Region::LowerRight => (i - n).max(j - n) + 2,
    };
    value as u32
}

/// Ring value from the distance to the nearest of the four edges:
/// `n - min(min(i, j), min(m-1-i, m-1-j))`.
pub fn reference_value(size: Size, i: u64, j: u64) -> u32 {
    let last = size.grid_dim() - 1;
    let edge = i.min(j).min((last - i).min(last - j));
    (u64::from(size.get()) - edge) as u32
}

/// Every cell value, row-major.
pub fn square_grid(size: Size) -> Vec<Vec<u32>> {
    let m = size.grid_dim();
    (0..m)
        .map(|i| (0..m).map(|j| cell_value(size, i, j)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: i64) -> Size {
        Size::new(n).unwrap()
    }

    #[test]
    fn three_matches_literal_grid() {
        let expected = vec![
            vec![3, 3, 3, 3, 3],
            vec![3, 2, 2, 2, 3],
            vec![3, 2, 1, 2, 3],
            vec![3, 2, 2, 2, 3],
            vec![3, 3, 3, 3, 3],
        ];
        assert_eq!(square_grid(size(3)), expected);
    }

    #[test]
    fn one_is_single_cell() {
        assert_eq!(square_grid(size(1)), vec![vec![1]]);
        assert_eq!(Region::classify(size(1), 0, 0), Region::UpperLeft);
    }

    #[test]
    fn corners_center_and_border() {
        for n in 1..=20 {
            let s = size(n);
            let last = s.grid_dim() - 1;
            let center = n as u64 - 1;
            assert_eq!(cell_value(s, center, center), 1);
            for (i, j) in [(0, 0), (0, last), (last, 0), (last, last)] {
                assert_eq!(cell_value(s, i, j), n as u32, "corner ({i}, {j}) of n = {n}");
            }
            for k in 0..=last {
                assert_eq!(cell_value(s, 0, k), n as u32);
                assert_eq!(cell_value(s, last, k), n as u32);
                assert_eq!(cell_value(s, k, 0), n as u32);
                assert_eq!(cell_value(s, k, last), n as u32);
            }
        }
    }

    #[test]
    fn both_sides_of_the_diagonal() {
        for n in 1..=20 {
            let s = size(n);
            let m = s.grid_dim();
            for i in 0..m {
                // on the anti-diagonal
                let j = m - 1 - i;
                assert_eq!(Region::classify(s, i, j), Region::UpperLeft);
                assert_eq!(cell_value(s, i, j), reference_value(s, i, j));
                // just above it
                if j > 0 {
                    assert_eq!(Region::classify(s, i, j - 1), Region::UpperLeft);
                    assert_eq!(cell_value(s, i, j - 1), reference_value(s, i, j - 1));
                }
                // just below it
                if j + 1 < m {
                    assert_eq!(Region::classify(s, i, j + 1), Region::LowerRight);
                    assert_eq!(cell_value(s, i, j + 1), reference_value(s, i, j + 1));
                }
            }
        }
    }

    #[test]
    fn two_region_formula_equals_reference() {
        for n in 1..=40 {
            let s = size(n);
            let m = s.grid_dim();
            for i in 0..m {
                for j in 0..m {
                    assert_eq!(
                        cell_value(s, i, j),
                        reference_value(s, i, j),
                        "cell ({i}, {j}) of n = {n}"
                    );
                }
            }
        }
    }

    #[test]
    fn symmetric_under_transpose_and_rotation() {
        for n in 1..=15 {
            let s = size(n);
            let grid = square_grid(s);
            let last = (s.grid_dim() - 1) as usize;
            for (i, row) in grid.iter().enumerate() {
                for (j, &v) in row.iter().enumerate() {
                    assert!((1..=n as u32).contains(&v));
                    assert_eq!(v, grid[j][i]);
                    assert_eq!(v, grid[last - i][last - j]);
                }
            }
        }
    }

    #[test]
    fn large_size_near_center() {
        let s = size(u32::MAX as i64);
        let center = u64::from(u32::MAX) - 1;
        assert_eq!(cell_value(s, center, center), 1);
        assert_eq!(cell_value(s, center + 1, center), 2);
        assert_eq!(cell_value(s, 0, center), u32::MAX);
        assert_eq!(reference_value(s, center + 3, center - 1), 4);
        assert_eq!(cell_value(s, center + 3, center - 1), 4);
    }
}

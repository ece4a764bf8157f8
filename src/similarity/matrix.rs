use crate::constants::SELF_SIMILARITY;

use super::error::SimilarityError;

/// Pair of comparison indices above some threshold (`row < column`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarPair {
    /// Current-response index.
    pub row: usize,
    /// Column index over current responses followed by historical ones.
    pub column: usize,
    pub similarity: f32,
}

/// Similarity of every current response against every current and historical response.
///
/// Rows exist only for the `N` current responses; columns cover `N + M` texts, current
/// first. Historical-by-historical pairs are never computed and cannot be read.
///
/// Invariants established by [`SimilarityMatrix::fill`]:
/// - `get(x, x) == 1.0`
/// - `get(x, y) == get(y, x)` for `x, y < N`
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    current_len: usize,
    total_len: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds the matrix by scoring only the upper triangle.
    ///
    /// `score(x, y)` is called once for every `x < y` with `x < N`. The diagonal is `1.0`
    /// and each lower-triangle cell copies its mirror from an earlier row.
    pub fn fill<F>(
        current_len: usize,
        historical_len: usize,
        mut score: F,
    ) -> Result<Self, SimilarityError>
    where
        F: FnMut(usize, usize) -> f32,
    {
        if current_len == 0 {
            return Err(SimilarityError::EmptyCurrentSet);
        }

        let total_len = current_len + historical_len;
        let mut values = vec![0.0f32; current_len * total_len];

        for x in 0..current_len {
            for y in 0..total_len {
                values[x * total_len + y] = if x == y {
                    SELF_SIMILARITY
                } else if x < y {
                    score(x, y)
                } else {
                    // y < x < N: row y was filled on an earlier pass.
                    values[y * total_len + x]
                };
            }
        }

        Ok(Self {
            current_len,
            total_len,
            values,
        })
    }

    /// Number of current responses (rows).
    pub fn current_len(&self) -> usize {
        self.current_len
    }

    /// Number of historical responses (trailing columns).
    pub fn historical_len(&self) -> usize {
        self.total_len - self.current_len
    }

    /// Number of columns.
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Similarity at `(x, y)`; `None` outside the current rows or column range.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.current_len || y >= self.total_len {
            return None;
        }
        Some(self.values[x * self.total_len + y])
    }

    /// Full row for current response `x`.
    pub fn row(&self, x: usize) -> Option<&[f32]> {
        if x >= self.current_len {
            return None;
        }
        let start = x * self.total_len;
        Some(&self.values[start..start + self.total_len])
    }

    /// Sum of row `x` excluding the diagonal.
    pub fn off_diagonal_sum(&self, x: usize) -> Option<f64> {
        let row = self.row(x)?;
        Some(
            row.iter()
                .enumerate()
                .filter(|(y, _)| *y != x)
                .map(|(_, &v)| f64::from(v))
                .sum(),
        )
    }

    /// Pairs strictly above `threshold`, each unordered pair once, row-major.
    pub fn pairs_above(&self, threshold: f32) -> impl Iterator<Item = SimilarPair> + '_ {
        (0..self.current_len).flat_map(move |row| {
            ((row + 1)..self.total_len).filter_map(move |column| {
                let similarity = self.values[row * self.total_len + column];
                (similarity > threshold).then_some(SimilarPair {
                    row,
                    column,
                    similarity,
                })
            })
        })
    }

    /// Returns `true` if `column` refers to a historical response.
    pub fn is_historical_column(&self, column: usize) -> bool {
        column >= self.current_len && column < self.total_len
    }
}

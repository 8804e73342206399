//! Dense cost matrix with unknown entries.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Entries are `Option<f64>`: `None` marks a cell the provider could not
/// price. Unknown cells are impassable and are never confused with a
/// legitimate zero-cost edge. Costs need not be symmetric.
///
/// Index 0 is the fixed start; indices `1..size` are stops in the caller's
/// input order.
///
/// # Examples
///
/// ```
/// use delivery_routing::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![Some(0.0), Some(10.0), None],
///     vec![Some(12.0), Some(0.0), Some(4.0)],
///     vec![Some(7.0), Some(3.0), Some(0.0)],
/// ])
/// .unwrap();
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(0, 1), Some(10.0));
/// assert_eq!(cm.get(0, 2), None);
/// assert!(!cm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<f64>>>", into = "Vec<Vec<Option<f64>>>")]
pub struct CostMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every entry unknown.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major grid.
    ///
    /// Fails with [`PlanError::SizeMismatch`] if the data length doesn't
    /// match `size * size`.
    pub fn from_data(size: usize, data: Vec<Option<f64>>) -> Result<Self, PlanError> {
        if data.len() != size * size {
            return Err(PlanError::SizeMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        Ok(Self {
            data: data.into_iter().map(sanitize).collect(),
            size,
        })
    }

    /// Creates a matrix from rows, as a provider response is usually shaped.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<Self, PlanError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(PlanError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            data.extend(values.into_iter().map(sanitize));
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from `from` to `to`, or `None` if it is unknown.
    ///
    /// Out-of-range indices are reported as unknown.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    ///
    /// NaN, infinite, and negative costs are stored as unknown.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = sanitize(Some(cost));
    }

    /// Marks the cost from `from` to `to` as unknown.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn clear(&mut self, from: usize, to: usize) {
        self.data[from * self.size + to] = None;
    }

    /// Number of nodes in this matrix (start plus stops).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// A known entry paired with an unknown one is asymmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                match (self.get(i, j), self.get(j, i)) {
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Returns a copy without the final row and column.
    ///
    /// Used to drop a fixed end location before sequencing the stops.
    pub fn without_last(&self) -> Self {
        let size = self.size.saturating_sub(1);
        let mut out = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                out.data[i * size + j] = self.get(i, j);
            }
        }
        out
    }

    /// Returns the nearest unvisited stop from `from`.
    ///
    /// Scans stops `1..size` in ascending order and keeps the first strictly
    /// cheaper known cost, so ties go to the lowest index. Unknown edges are
    /// never chosen. Indices beyond `visited.len()` count as visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for next in 1..self.size {
            if visited.get(next).copied().unwrap_or(true) {
                continue;
            }
            let Some(cost) = self.get(from, next) else {
                continue;
            };
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((next, cost));
            }
        }
        best.map(|(next, _)| next)
    }

    /// Returns the matrix as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.data.chunks(self.size).map(<[_]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Option<f64>>>> for CostMatrix {
    type Error = PlanError;

    fn try_from(rows: Vec<Vec<Option<f64>>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Option<f64>>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

fn sanitize(cost: Option<f64>) -> Option<f64> {
    cost.filter(|c| c.is_finite() && *c >= 0.0)
}

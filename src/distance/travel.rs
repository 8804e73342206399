//! Distance and duration matrices as returned by a matrix provider.

use serde::{Deserialize, Serialize};

use super::CostMatrix;
use crate::error::{PlanError, Result};

/// One cell of a provider response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatrixElement {
    /// Travel distance in meters and duration in seconds.
    Ok { distance: f64, duration: f64 },
    /// The provider could not route between the two locations.
    Failed,
}

/// Paired distance and duration matrices over the same location order.
///
/// Both matrices always cover the same number of locations; deserializing
/// a mismatched pair fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTravelMatrices")]
pub struct TravelMatrices {
    distance: CostMatrix,
    duration: CostMatrix,
}

#[derive(Deserialize)]
struct RawTravelMatrices {
    distance: CostMatrix,
    duration: CostMatrix,
}

impl TryFrom<RawTravelMatrices> for TravelMatrices {
    type Error = PlanError;

    fn try_from(raw: RawTravelMatrices) -> Result<Self> {
        Self::new(raw.distance, raw.duration)
    }
}

impl TravelMatrices {
    /// Pairs two matrices, checking that they cover the same locations.
    pub fn new(distance: CostMatrix, duration: CostMatrix) -> Result<Self> {
        if distance.size() != duration.size() {
            return Err(PlanError::SizeMismatch {
                expected: distance.size(),
                found: duration.size(),
            });
        }
        Ok(Self { distance, duration })
    }

    /// Builds both matrices from provider rows.
    ///
    /// `rows` is a list of `(first_origin, elements)` batches as produced by
    /// requesting [`origin_chunk_size`] origins at a time. Failed elements and
    /// cells no batch covered stay unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_routing::distance::{MatrixElement, TravelMatrices};
    ///
    /// let ok = |d: f64, t: f64| MatrixElement::Ok { distance: d, duration: t };
    /// let rows = vec![
    ///     (0, vec![vec![ok(0.0, 0.0), ok(900.0, 120.0)]]),
    ///     (1, vec![vec![MatrixElement::Failed, ok(0.0, 0.0)]]),
    /// ];
    /// let tm = TravelMatrices::assemble(2, rows).unwrap();
    /// assert_eq!(tm.distance().get(0, 1), Some(900.0));
    /// assert_eq!(tm.duration().get(0, 1), Some(120.0));
    /// assert_eq!(tm.distance().get(1, 0), None);
    /// ```
    pub fn assemble<I>(size: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, Vec<Vec<MatrixElement>>)>,
    {
        let mut distance = CostMatrix::new(size);
        let mut duration = CostMatrix::new(size);

        for (first_origin, batch) in rows {
            for (offset, row) in batch.into_iter().enumerate() {
                let origin = first_origin + offset;
                if origin >= size || row.len() != size {
                    return Err(PlanError::matrix(format!(
                        "row for origin {origin} has {} elements, expected {size}",
                        row.len()
                    )));
                }
                for (dest, element) in row.into_iter().enumerate() {
                    if let MatrixElement::Ok {
                        distance: d,
                        duration: t,
                    } = element
                    {
                        distance.set(origin, dest, d);
                        duration.set(origin, dest, t);
                    }
                }
            }
        }

        Ok(Self { distance, duration })
    }

    /// Number of locations covered.
    pub fn size(&self) -> usize {
        self.distance.size()
    }

    /// Travel distance in meters.
    pub fn distance(&self) -> &CostMatrix {
        &self.distance
    }

    /// Travel duration in seconds.
    pub fn duration(&self) -> &CostMatrix {
        &self.duration
    }

    pub fn into_parts(self) -> (CostMatrix, CostMatrix) {
        (self.distance, self.duration)
    }
}

/// Number of origins to request per provider call so that each call stays
/// within `max_elements` cells. Always at least 1.
pub fn origin_chunk_size(locations: usize, max_elements: usize) -> usize {
    if locations == 0 {
        return max_elements.max(1);
    }
    (max_elements / locations).max(1)
}

//! Point identifiers
//!
//! Every distinct point in a diagram gets a numeric id. Ids are assigned in
//! point order starting from a caller-supplied offset, so several diagrams can
//! share one fact base without collisions.

use super::coords::Point;
use crate::error::{NetworkError, NetworkResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Newtype wrapper for point identifiers, rendered as `v{n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Bijection between the points of one diagram and `[start, start + N)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTable {
    start: u32,
    ids: FxHashMap<Point, PointId>,
    points: Vec<Point>,
}

impl IdTable {
    /// Assign ids to `points` in iteration order, beginning at `start`
    pub fn build<I>(points: I, start: u32) -> NetworkResult<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut ids = FxHashMap::default();
        let mut ordered = Vec::new();

        for point in points {
            let offset = u32::try_from(ordered.len())
                .ok()
                .and_then(|n| start.checked_add(n))
                .ok_or(NetworkError::IdOverflow {
                    start,
                    count: ordered.len() + 1,
                })?;

            if ids.insert(point, PointId(offset)).is_some() {
                return Err(NetworkError::DuplicatePoint(point));
            }
            ordered.push(point);
        }

        // the exclusive end of the range must fit as well
        start
            .checked_add(ordered.len() as u32)
            .ok_or(NetworkError::IdOverflow {
                start,
                count: ordered.len(),
            })?;

        Ok(Self {
            start,
            ids,
            points: ordered,
        })
    }

    /// Id of a point, if it belongs to this table
    pub fn id_of(&self, point: &Point) -> Option<PointId> {
        self.ids.get(point).copied()
    }

    /// Point carrying an id, if the id is in range
    pub fn point_of(&self, id: PointId) -> Option<Point> {
        let index = id.0.checked_sub(self.start)?;
        self.points.get(index as usize).copied()
    }

    /// Zero-based position of a point in assignment order
    pub fn index_of(&self, point: &Point) -> Option<usize> {
        self.id_of(point).map(|id| (id.0 - self.start) as usize)
    }

    /// Id for the point at a zero-based position
    pub fn id_at(&self, index: usize) -> PointId {
        PointId(self.start + index as u32)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// First id free for the next diagram in a merged corpus
    pub fn next_start(&self) -> u32 {
        self.start + self.points.len() as u32
    }

    pub fn range(&self) -> Range<u32> {
        self.start..self.next_start()
    }

    /// Points in assignment order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (self.id_at(i), *p))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

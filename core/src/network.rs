//! Point/line networks and fact generation
//!
//! A [`Network`] is built once from an ordered point list and an edge list and
//! never changes afterwards. [`Network::describe`] walks it and produces a
//! fresh [`FactBase`] on every call.

use crate::diagram::Diagram;
use crate::error::{NetworkError, NetworkResult};
use crate::geometry::classify;
use crate::ir::{AngleCategory, Color, Edge, Fact, FactBase, IdTable, Point, PointId};
use tracing::debug;

/// Adjacency structure over the points of a single diagram
#[derive(Debug, Clone)]
pub struct Network {
    ids: IdTable,
    /// Binarized label per point, indexed like `ids.points()`
    high: Vec<bool>,
    /// Neighbor indices per point, in edge insertion order
    adjacency: Vec<Vec<usize>>,
}

impl Network {
    /// Build the adjacency structure
    ///
    /// Points keep the order given here; ids run from `start` in that order.
    /// Each edge is recorded in both endpoints' neighbor lists. Repeated edges
    /// are kept as repeated neighbors.
    pub fn new(points: &[(Point, Color)], edges: &[Edge], start: u32) -> NetworkResult<Self> {
        let ids = IdTable::build(points.iter().map(|(p, _)| *p), start)?;
        let high = points.iter().map(|(_, c)| c.is_high()).collect();
        let mut adjacency = vec![Vec::new(); ids.len()];

        for edge in edges {
            if edge.is_loop() {
                return Err(NetworkError::SelfLoop(edge.a));
            }
            let a = Self::endpoint(&ids, edge, edge.a)?;
            let b = Self::endpoint(&ids, edge, edge.b)?;

            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        Ok(Self {
            ids,
            high,
            adjacency,
        })
    }

    /// Build from a saved diagram
    pub fn from_diagram(diagram: &Diagram, start: u32) -> NetworkResult<Self> {
        Self::new(&diagram.points, &diagram.lines, start)
    }

    fn endpoint(ids: &IdTable, edge: &Edge, point: Point) -> NetworkResult<usize> {
        ids.index_of(&point).ok_or(NetworkError::InvalidEdge {
            a: edge.a,
            b: edge.b,
            missing: point,
        })
    }

    /// Number of points
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &IdTable {
        &self.ids
    }

    /// Neighbors of a point in edge insertion order
    pub fn neighbors(&self, point: &Point) -> Option<Vec<Point>> {
        let index = self.ids.index_of(point)?;
        let points = self.ids.points();
        Some(self.adjacency[index].iter().map(|&n| points[n]).collect())
    }

    /// Length of a point's neighbor list
    pub fn degree(&self, point: &Point) -> Option<usize> {
        self.ids.index_of(point).map(|i| self.adjacency[i].len())
    }

    /// Whether a point is labeled as a high point
    pub fn is_high(&self, point: &Point) -> Option<bool> {
        self.ids.index_of(point).map(|i| self.high[i])
    }

    /// Generate target and background facts
    ///
    /// For every point, in id order: one `highpoint` target fact, one
    /// `nneighbors` fact, two `connected` facts per neighbor entry, and two
    /// `angledegrees` facts for every unordered pair of neighbor entries.
    pub fn describe(&self) -> NetworkResult<FactBase> {
        let mut base = FactBase::new();
        let points = self.ids.points();

        for (index, neighbors) in self.adjacency.iter().enumerate() {
            let id = self.ids.id_at(index);

            if self.high[index] {
                base.pos.push(Fact::HighPoint(id));
            } else {
                base.neg.push(Fact::HighPoint(id));
            }

            base.facts.push(Fact::NNeighbors(id, neighbors.len()));

            for &n in neighbors {
                let n_id = self.ids.id_at(n);
                base.facts.push(Fact::Connected(id, n_id));
                base.facts.push(Fact::Connected(n_id, id));
            }

            // degree 0 and 1 have no pairs; degree 2 has exactly one
            for (i, &a) in neighbors.iter().enumerate() {
                for &c in &neighbors[i + 1..] {
                    let category = classify(points[a], points[index], points[c])?;
                    self.push_angle(&mut base.facts, id, a, c, category);
                }
            }
        }

        debug!(
            points = self.size(),
            start = self.ids.start(),
            pos = base.pos.len(),
            neg = base.neg.len(),
            facts = base.facts.len(),
            "described network"
        );

        Ok(base)
    }

    fn push_angle(
        &self,
        facts: &mut Vec<Fact>,
        vertex: PointId,
        a: usize,
        c: usize,
        category: AngleCategory,
    ) {
        let a_id = self.ids.id_at(a);
        let c_id = self.ids.id_at(c);

        facts.push(Fact::AngleDegrees(vertex, a_id, c_id, category));
        facts.push(Fact::AngleDegrees(vertex, c_id, a_id, category));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::FactType;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    fn black(points: &[Point]) -> Vec<(Point, Color)> {
        points.iter().map(|&p| (p, Color::BLACK)).collect()
    }

    #[test]
    fn test_adjacency_both_directions() {
        let points = black(&[p(0, 0), p(25, 0), p(50, 0)]);
        let edges = [Edge::new(p(0, 0), p(25, 0)), Edge::new(p(25, 0), p(50, 0))];

        let net = Network::new(&points, &edges, 0).unwrap();

        assert_eq!(net.neighbors(&p(25, 0)), Some(vec![p(0, 0), p(50, 0)]));
        assert_eq!(net.neighbors(&p(0, 0)), Some(vec![p(25, 0)]));
        assert_eq!(net.degree(&p(50, 0)), Some(1));
        assert_eq!(net.degree(&p(99, 99)), None);
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let points = black(&[p(0, 0)]);
        let edges = [Edge::new(p(0, 0), p(25, 0))];

        let err = Network::new(&points, &edges, 0).unwrap_err();

        assert_eq!(
            err,
            NetworkError::InvalidEdge {
                a: p(0, 0),
                b: p(25, 0),
                missing: p(25, 0)
            }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let points = black(&[p(0, 0)]);
        let edges = [Edge::new(p(0, 0), p(0, 0))];

        assert_eq!(
            Network::new(&points, &edges, 0).unwrap_err(),
            NetworkError::SelfLoop(p(0, 0))
        );
    }

    #[test]
    fn test_straight_line_middle() {
        let points = vec![
            (p(0, 0), Color::BLACK),
            (p(25, 0), Color::ORANGE),
            (p(50, 0), Color::BLACK),
        ];
        let edges = [Edge::new(p(0, 0), p(25, 0)), Edge::new(p(25, 0), p(50, 0))];

        let base = Network::new(&points, &edges, 0).unwrap().describe().unwrap();

        assert_eq!(base.pos_lines().collect::<Vec<_>>(), vec!["highpoint(v1)."]);
        assert_eq!(base.neg.len(), 2);
        let angles: Vec<String> = base
            .facts_of_type(FactType::AngleDegrees)
            .map(|f| f.to_string())
            .collect();
        assert_eq!(
            angles,
            vec![
                "angledegrees(v1,v0,v2,straightline).",
                "angledegrees(v1,v2,v0,straightline)."
            ]
        );
    }

    #[test]
    fn test_pairs_follow_combination_order() {
        // star: center with three arms
        let center = p(100, 100);
        let points = black(&[center, p(200, 100), p(100, 0), p(0, 100)]);
        let edges = [
            Edge::new(center, p(200, 100)),
            Edge::new(center, p(100, 0)),
            Edge::new(center, p(0, 100)),
        ];

        let base = Network::new(&points, &edges, 0).unwrap().describe().unwrap();
        let angles: Vec<Fact> = base.facts_of_type(FactType::AngleDegrees).copied().collect();

        assert_eq!(
            angles,
            vec![
                Fact::AngleDegrees(PointId(0), PointId(1), PointId(2), AngleCategory::Right),
                Fact::AngleDegrees(PointId(0), PointId(2), PointId(1), AngleCategory::Right),
                Fact::AngleDegrees(PointId(0), PointId(1), PointId(3), AngleCategory::Straight),
                Fact::AngleDegrees(PointId(0), PointId(3), PointId(1), AngleCategory::Straight),
                Fact::AngleDegrees(PointId(0), PointId(2), PointId(3), AngleCategory::Right),
                Fact::AngleDegrees(PointId(0), PointId(3), PointId(2), AngleCategory::Right),
            ]
        );
    }

    #[test]
    fn test_duplicate_edge_kept_and_degenerate() {
        let points = black(&[p(0, 0), p(25, 0)]);
        let edge = Edge::new(p(0, 0), p(25, 0));
        let reversed = Edge::new(p(25, 0), p(0, 0));
        let net = Network::new(&points, &[edge, reversed], 0).unwrap();

        assert_eq!(net.degree(&p(0, 0)), Some(2));
        assert!(matches!(
            net.describe(),
            Err(NetworkError::DegenerateAngle { .. })
        ));
    }

    #[test]
    fn test_extreme_coordinates_describe() {
        let vertex = p(i64::MIN, 0);
        let points = vec![
            (vertex, Color::ORANGE),
            (p(i64::MAX, 0), Color::BLACK),
            (p(i64::MAX, 1), Color::BLACK),
        ];
        let edges = [
            Edge::new(vertex, p(i64::MAX, 0)),
            Edge::new(vertex, p(i64::MAX, 1)),
        ];

        let net = Network::new(&points, &edges, 0).unwrap();
        let base = net.describe().unwrap();

        assert_eq!(net.is_high(&vertex), Some(true));
        assert_eq!(net.is_high(&p(i64::MAX, 1)), Some(false));
        assert_eq!(net.is_high(&p(0, 0)), None);
        assert_eq!(
            base.facts_of_type(FactType::AngleDegrees).next(),
            Some(&Fact::AngleDegrees(PointId(0), PointId(1), PointId(2), AngleCategory::Acute))
        );
    }

    #[test]
    fn test_describe_is_repeatable() {
        let points = black(&[p(0, 0), p(25, 0), p(25, 25)]);
        let edges = [Edge::new(p(0, 0), p(25, 0)), Edge::new(p(25, 0), p(25, 25))];
        let net = Network::new(&points, &edges, 7).unwrap();

        assert_eq!(net.describe().unwrap(), net.describe().unwrap());
    }
}

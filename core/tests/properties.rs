//! Property tests over random diagrams

use proptest::prelude::*;
use roofworld_core::*;
use std::collections::HashSet;

/// Distinct grid points with random colors, plus simple edges between them
fn diagram_strategy() -> impl Strategy<Value = Diagram> {
    prop::collection::hash_set((0i64..40, 0i64..40), 1..24)
        .prop_flat_map(|coords| {
            let points: Vec<Point> = coords.into_iter().map(Point::from).collect();
            let n = points.len();
            (
                Just(points),
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec((0..n, 0..n), 0..(3 * n)),
            )
        })
        .prop_map(|(points, high, pairs)| {
            let colored = points
                .iter()
                .zip(high)
                .map(|(&p, h)| (p, if h { Color::ORANGE } else { Color::BLACK }))
                .collect();

            let mut lines: Vec<Edge> = Vec::new();
            for (i, j) in pairs {
                let edge = Edge::new(points[i], points[j]);
                if !edge.is_loop() && !lines.iter().any(|l| l.same_as(&edge)) {
                    lines.push(edge);
                }
            }
            Diagram::new(colored, lines)
        })
}

fn choose2(d: usize) -> usize {
    d * d.saturating_sub(1) / 2
}

proptest! {
    #[test]
    fn ids_are_a_bijection(diagram in diagram_strategy(), start in 0u32..10_000) {
        let net = Network::from_diagram(&diagram, start).unwrap();
        let ids = net.ids();
        let n = diagram.points.len() as u32;

        prop_assert_eq!(ids.range(), start..start + n);
        for (point, _) in &diagram.points {
            let id = ids.id_of(point).unwrap();
            prop_assert!(ids.range().contains(&id.0));
            prop_assert_eq!(ids.point_of(id), Some(*point));
        }
        for raw in ids.range() {
            let point = ids.point_of(PointId(raw)).unwrap();
            prop_assert_eq!(ids.id_of(&point), Some(PointId(raw)));
        }
    }

    #[test]
    fn every_point_has_one_target_fact(diagram in diagram_strategy(), start in 0u32..10_000) {
        let base = diagram.describe(start).unwrap();

        let pos: HashSet<PointId> = base.pos.iter().map(Fact::subject).collect();
        let neg: HashSet<PointId> = base.neg.iter().map(Fact::subject).collect();

        prop_assert_eq!(base.num_examples(), diagram.points.len());
        prop_assert!(pos.is_disjoint(&neg));
        prop_assert_eq!(pos.len() + neg.len(), diagram.points.len());

        let high = diagram.points.iter().filter(|(_, c)| c.is_high()).count();
        prop_assert_eq!(base.pos.len(), high);
    }

    #[test]
    fn fact_counts_follow_degrees(diagram in diagram_strategy()) {
        let net = Network::from_diagram(&diagram, 0).unwrap();
        let base = net.describe().unwrap();

        let degrees: Vec<usize> = diagram
            .points
            .iter()
            .map(|(p, _)| net.degree(p).unwrap())
            .collect();

        prop_assert_eq!(degrees.iter().sum::<usize>(), 2 * diagram.lines.len());
        prop_assert_eq!(
            base.facts_of_type(FactType::NNeighbors).count(),
            diagram.points.len()
        );
        prop_assert_eq!(
            base.facts_of_type(FactType::Connected).count(),
            4 * diagram.lines.len()
        );
        prop_assert_eq!(
            base.facts_of_type(FactType::AngleDegrees).count(),
            degrees.iter().map(|&d| 2 * choose2(d)).sum::<usize>()
        );
    }

    #[test]
    fn discretize_matches_rounded_value(degrees in 0.0f64..=180.0) {
        let rounded = degrees.round_ties_even();
        let expected = if rounded < 90.0 {
            AngleCategory::Acute
        } else if rounded == 90.0 {
            AngleCategory::Right
        } else if rounded == 180.0 {
            AngleCategory::Straight
        } else {
            AngleCategory::Obtuse
        };

        prop_assert_eq!(discretize_angle(degrees), expected);
    }
}

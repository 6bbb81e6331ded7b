//! Python bindings for Roofworld
//!
//! ```python
//! import roofworld
//!
//! points = [((400, 175), (0, 0, 0)), ((500, 175), (255, 165, 0))]
//! lines = [((400, 175), (500, 175))]
//! pos, neg, facts = roofworld.describe(points, lines, start=0)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use roofworld_core::{Color, Edge, Network, Point};

type PyPoint = (i64, i64);

/// Describe a diagram, returning `(pos, neg, facts)` lists of fact strings
#[pyfunction]
#[pyo3(signature = (points, lines, start = 0))]
fn describe(
    points: Vec<(PyPoint, (u8, u8, u8))>,
    lines: Vec<(PyPoint, PyPoint)>,
    start: u32,
) -> PyResult<(Vec<String>, Vec<String>, Vec<String>)> {
    let points: Vec<(Point, Color)> = points
        .into_iter()
        .map(|(p, (r, g, b))| (Point::from(p), Color(r, g, b)))
        .collect();
    let lines: Vec<Edge> = lines
        .into_iter()
        .map(|(a, b)| Edge::new(Point::from(a), Point::from(b)))
        .collect();

    let base = Network::new(&points, &lines, start)
        .and_then(|net| net.describe())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok((
        base.pos_lines().collect(),
        base.neg_lines().collect(),
        base.fact_lines().collect(),
    ))
}

/// Category name for an angle in degrees
#[pyfunction]
fn discretize_angle(degrees: f64) -> &'static str {
    roofworld_core::discretize_angle(degrees).as_str()
}

#[pymodule]
fn roofworld(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(describe, m)?)?;
    m.add_function(wrap_pyfunction!(discretize_angle, m)?)?;
    Ok(())
}

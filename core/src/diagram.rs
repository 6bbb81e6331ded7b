//! Diagrams and the editable sketch behind them
//!
//! A [`Diagram`] is the saved form of a roof drawing: an ordered point list
//! with colors plus the lines between points. A [`Sketch`] wraps a diagram
//! with the editing operations and an undo log.

use crate::error::{NetworkError, NetworkResult};
use crate::ir::{Color, Edge, FactBase, Point};
use crate::loader::{load_diagram, save_diagram, LoadResult};
use crate::network::Network;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid spacing used when snapping clicks to points
pub const DEFAULT_SPACING: i64 = 25;

/// A saved roof drawing
///
/// Point order is significant: it fixes id assignment and therefore the
/// content of the generated facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    pub points: Vec<(Point, Color)>,
    pub lines: Vec<Edge>,
}

impl Diagram {
    pub fn new(points: Vec<(Point, Color)>, lines: Vec<Edge>) -> Self {
        Self { points, lines }
    }

    pub fn color_of(&self, point: &Point) -> Option<Color> {
        self.points
            .iter()
            .find(|(p, _)| p == point)
            .map(|(_, c)| *c)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.color_of(point).is_some()
    }

    pub fn has_line(&self, edge: &Edge) -> bool {
        self.lines.iter().any(|l| l.same_as(edge))
    }

    /// Facts for this diagram with ids starting at `start`
    pub fn describe(&self, start: u32) -> NetworkResult<FactBase> {
        Network::from_diagram(self, start)?.describe()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Write the diagram to `path` as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LoadResult<()> {
        save_diagram(self, path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        load_diagram(path)
    }
}

/// Round a screen coordinate to the nearest grid line
///
/// Halfway values go to the even multiple.
pub fn snap(value: f64, spacing: i64) -> i64 {
    (value / spacing as f64).round_ties_even() as i64 * spacing
}

pub fn snap_point(x: f64, y: f64, spacing: i64) -> Point {
    Point::new(snap(x, spacing), snap(y, spacing))
}

/// State captured by a reset so that it can be undone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub operations: Vec<Operation>,
    pub diagram: Diagram,
}

/// One reversible edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    AddPoint(Point),
    AddLine(Edge),
    TogglePoint(Point),
    Reset(Snapshot),
}

/// Editable diagram with undo history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sketch {
    operations: Vec<Operation>,
    diagram: Diagram,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing a saved diagram with an empty history
    pub fn from_diagram(diagram: Diagram) -> Self {
        Self {
            operations: Vec::new(),
            diagram,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn into_diagram(self) -> Diagram {
        self.diagram
    }

    pub fn history(&self) -> &[Operation] {
        &self.operations
    }

    /// Add a black point; returns false if the point already exists
    pub fn add_point(&mut self, point: Point) -> bool {
        if self.diagram.contains(&point) {
            return false;
        }
        self.operations.push(Operation::AddPoint(point));
        self.diagram.points.push((point, Color::BLACK));
        true
    }

    /// Switch a point between black and orange, returning the new color
    pub fn toggle_point(&mut self, point: Point) -> NetworkResult<Color> {
        let entry = self
            .diagram
            .points
            .iter_mut()
            .find(|(p, _)| *p == point)
            .ok_or(NetworkError::UnknownPoint(point))?;

        entry.1 = entry.1.toggled();
        self.operations.push(Operation::TogglePoint(point));
        Ok(entry.1)
    }

    /// Toggle an existing point or add a new one
    pub fn click(&mut self, point: Point) {
        if self.toggle_point(point).is_err() {
            self.add_point(point);
        }
    }

    /// Connect two existing points
    ///
    /// Returns false, without recording anything, when the same line already
    /// exists in either orientation.
    pub fn add_line(&mut self, a: Point, b: Point) -> NetworkResult<bool> {
        let edge = Edge::new(a, b);
        if edge.is_loop() {
            return Err(NetworkError::SelfLoop(a));
        }
        for p in [a, b] {
            if !self.diagram.contains(&p) {
                return Err(NetworkError::InvalidEdge { a, b, missing: p });
            }
        }
        if self.diagram.has_line(&edge) {
            return Ok(false);
        }

        self.operations.push(Operation::AddLine(edge));
        self.diagram.lines.push(edge);
        Ok(true)
    }

    /// Clear the drawing; the cleared state is kept so undo can restore it
    pub fn reset(&mut self) {
        let snapshot = Snapshot {
            operations: std::mem::take(&mut self.operations),
            diagram: std::mem::take(&mut self.diagram),
        };
        self.operations.push(Operation::Reset(snapshot));
    }

    /// Revert the most recent operation; returns false if there is none
    pub fn undo(&mut self) -> bool {
        let Some(op) = self.operations.pop() else {
            return false;
        };

        match op {
            Operation::AddPoint(point) => {
                self.diagram.points.retain(|(p, _)| *p != point);
            }
            Operation::AddLine(_) => {
                self.diagram.lines.pop();
            }
            Operation::TogglePoint(point) => {
                if let Some(entry) = self.diagram.points.iter_mut().find(|(p, _)| *p == point) {
                    entry.1 = entry.1.toggled();
                }
            }
            Operation::Reset(snapshot) => {
                self.operations = snapshot.operations;
                self.diagram = snapshot.diagram;
            }
        }
        true
    }

    /// Facts for the current drawing
    pub fn describe(&self, start: u32) -> NetworkResult<FactBase> {
        self.diagram.describe(start)
    }
}

//! Relational facts and fact bases
//!
//! Facts are the textual predicates consumed by the relational learner:
//!
//! ```text
//! highpoint(v<id>).
//! nneighbors(v<id>,<int>).
//! connected(v<id>,v<id>).
//! angledegrees(v<id>,v<id>,v<id>,<category>).
//! ```

use super::symbols::PointId;
use crate::error::{NetworkError, NetworkResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discretized angle between two edges meeting at a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AngleCategory {
    Acute,
    Right,
    Straight,
    Obtuse,
}

impl AngleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleCategory::Acute => "acuteangle",
            AngleCategory::Right => "rightangle",
            AngleCategory::Straight => "straightline",
            AngleCategory::Obtuse => "obtuseangle",
        }
    }
}

impl fmt::Display for AngleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "acuteangle" => Ok(AngleCategory::Acute),
            "rightangle" => Ok(AngleCategory::Right),
            "straightline" => Ok(AngleCategory::Straight),
            "obtuseangle" => Ok(AngleCategory::Obtuse),
            other => Err(format!("unknown angle category `{}`", other)),
        }
    }
}

/// A single relational fact about the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fact {
    /// Target predicate: the point is a high point (positive) or not (negative)
    HighPoint(PointId),

    /// Number of entries in the point's neighbor list
    NNeighbors(PointId, usize),

    /// Directed adjacency between two points
    Connected(PointId, PointId),

    /// Angle at the first point between the rays towards the second and third
    AngleDegrees(PointId, PointId, PointId, AngleCategory),
}

/// Enumeration of fact types for filtering and counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactType {
    HighPoint,
    NNeighbors,
    Connected,
    AngleDegrees,
}

impl FactType {
    pub fn predicate(&self) -> &'static str {
        match self {
            FactType::HighPoint => "highpoint",
            FactType::NNeighbors => "nneighbors",
            FactType::Connected => "connected",
            FactType::AngleDegrees => "angledegrees",
        }
    }
}

impl Fact {
    pub fn fact_type(&self) -> FactType {
        match self {
            Fact::HighPoint(_) => FactType::HighPoint,
            Fact::NNeighbors(_, _) => FactType::NNeighbors,
            Fact::Connected(_, _) => FactType::Connected,
            Fact::AngleDegrees(_, _, _, _) => FactType::AngleDegrees,
        }
    }

    /// The point the fact is about
    pub fn subject(&self) -> PointId {
        match *self {
            Fact::HighPoint(p)
            | Fact::NNeighbors(p, _)
            | Fact::Connected(p, _)
            | Fact::AngleDegrees(p, _, _, _) => p,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.fact_type().predicate())?;
        match self {
            Fact::HighPoint(p) => write!(f, "{}", p)?,
            Fact::NNeighbors(p, n) => write!(f, "{},{}", p, n)?,
            Fact::Connected(p, q) => write!(f, "{},{}", p, q)?,
            Fact::AngleDegrees(k, a, c, cat) => write!(f, "{},{},{},{}", k, a, c, cat)?,
        }
        f.write_str(").")
    }
}

fn parse_id(arg: &str) -> Result<PointId, String> {
    arg.strip_prefix('v')
        .and_then(|n| n.parse::<u32>().ok())
        .map(PointId)
        .ok_or_else(|| format!("`{}` is not a point id", arg))
}

fn parse_fact(line: &str) -> Result<Fact, String> {
    let body = line
        .strip_suffix('.')
        .ok_or_else(|| "missing trailing `.`".to_string())?;
    let (name, rest) = body
        .split_once('(')
        .ok_or_else(|| "missing `(`".to_string())?;
    let args: Vec<&str> = rest
        .strip_suffix(')')
        .ok_or_else(|| "missing `)`".to_string())?
        .split(',')
        .collect();

    match (name, args.as_slice()) {
        ("highpoint", [p]) => Ok(Fact::HighPoint(parse_id(p)?)),
        ("nneighbors", [p, n]) => {
            let n = n
                .parse::<usize>()
                .map_err(|_| format!("`{}` is not a neighbor count", n))?;
            Ok(Fact::NNeighbors(parse_id(p)?, n))
        }
        ("connected", [p, q]) => Ok(Fact::Connected(parse_id(p)?, parse_id(q)?)),
        ("angledegrees", [k, a, c, cat]) => Ok(Fact::AngleDegrees(
            parse_id(k)?,
            parse_id(a)?,
            parse_id(c)?,
            cat.parse()?,
        )),
        ("highpoint" | "nneighbors" | "connected" | "angledegrees", _) => {
            Err(format!("wrong number of arguments for `{}`", name))
        }
        _ => Err(format!("unknown predicate `{}`", name)),
    }
}

impl FromStr for Fact {
    type Err = NetworkError;

    fn from_str(s: &str) -> NetworkResult<Self> {
        let line = s.trim();
        parse_fact(line).map_err(|reason| NetworkError::FactParse {
            line: line.to_string(),
            reason,
        })
    }
}

/// Target and background facts derived from one or more diagrams
///
/// `pos` and `neg` hold `highpoint` facts for high and low points;
/// `facts` holds the structural background facts. All three keep emission
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactBase {
    pub pos: Vec<Fact>,
    pub neg: Vec<Fact>,
    pub facts: Vec<Fact>,
}

impl FactBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.pos.iter().map(Fact::to_string)
    }

    pub fn neg_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.neg.iter().map(Fact::to_string)
    }

    pub fn fact_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.facts.iter().map(Fact::to_string)
    }

    /// Background facts of one type, in emission order
    pub fn facts_of_type(&self, fact_type: FactType) -> impl Iterator<Item = &Fact> + '_ {
        self.facts
            .iter()
            .filter(move |f| f.fact_type() == fact_type)
    }

    /// Append another fact base after this one
    pub fn extend(&mut self, other: FactBase) {
        self.pos.extend(other.pos);
        self.neg.extend(other.neg);
        self.facts.extend(other.facts);
    }

    /// Number of target examples (positive plus negative)
    pub fn num_examples(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    pub fn len(&self) -> usize {
        self.num_examples() + self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

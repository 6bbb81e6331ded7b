//! Angle discretization
//!
//! Continuous angles are reduced to four categories after rounding to a whole
//! degree. Rounding is half-to-even, so 89.5 and 90.5 both become 90.

use crate::error::NetworkResult;
use crate::ir::{ops, AngleCategory, Point};

/// Map an angle in degrees to its category
///
/// | rounded      | category     |
/// |--------------|--------------|
/// | `< 90`       | acuteangle   |
/// | `== 90`      | rightangle   |
/// | `== 180`     | straightline |
/// | anything else| obtuseangle  |
pub fn discretize_angle(degrees: f64) -> AngleCategory {
    let rounded = degrees.round_ties_even();

    if rounded < 90.0 {
        AngleCategory::Acute
    } else if rounded == 180.0 {
        AngleCategory::Straight
    } else if rounded == 90.0 {
        AngleCategory::Right
    } else {
        AngleCategory::Obtuse
    }
}

/// Category of the angle at `vertex` between the rays towards `a` and `c`
pub fn classify(a: Point, vertex: Point, c: Point) -> NetworkResult<AngleCategory> {
    ops::points_to_degrees(a, vertex, c).map(discretize_angle)
}

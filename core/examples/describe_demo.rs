//! Walk through building a sketch and describing it
//!
//! Run with: cargo run --example describe_demo

use roofworld_core::diagram::{snap_point, DEFAULT_SPACING};
use roofworld_core::*;

fn main() {
    println!("=== Roofworld Describe Demo ===\n");

    // 1. Sketch a shed roof: a square with one raised corner
    println!("1. Sketching:");
    let mut sketch = Sketch::new();
    let clicks = [(398.0, 176.0), (402.0, 249.0), (501.0, 174.0), (499.0, 251.0)];
    let corners: Vec<Point> = clicks
        .iter()
        .map(|&(x, y)| snap_point(x, y, DEFAULT_SPACING))
        .collect();

    for &corner in &corners {
        sketch.click(corner);
    }
    sketch.click(corners[2]);

    for (a, b) in [(0, 2), (2, 3), (3, 1), (1, 0)] {
        if let Err(e) = sketch.add_line(corners[a], corners[b]) {
            println!("   could not add line: {}", e);
        }
    }
    println!("   Points: {:?}", corners);
    println!("   Operations recorded: {}\n", sketch.history().len());

    // 2. Facts
    println!("2. Facts:");
    match sketch.describe(0) {
        Ok(base) => {
            for line in base.pos_lines() {
                println!("   + {}", line);
            }
            for line in base.neg_lines() {
                println!("   - {}", line);
            }
            for line in base.fact_lines() {
                println!("     {}", line);
            }
        }
        Err(e) => println!("   failed: {}", e),
    }

    // 3. Undo
    println!("\n3. Undo:");
    sketch.undo();
    println!("   Lines after undo: {}", sketch.diagram().lines.len());
}

//! Electrode shapes - conductors held at a fixed potential

use serde::{Deserialize, Serialize};

/// A conducting electrode with a fixed potential
///
/// Electrodes are immutable once constructed: neither their shape nor their
/// potential changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Electrode {
    /// A circular (disk) electrode
    Circular {
        /// Center X coordinate
        x: f64,
        /// Center Y coordinate
        y: f64,
        /// Radius
        r: f64,
        /// Fixed potential on the conductor
        potential: f64,
    },
    /// An axis-aligned rectangular electrode given by two opposite corners
    ///
    /// The corners do not need to be ordered; containment uses the min/max
    /// of each coordinate pair.
    Rectangular {
        /// First corner X coordinate
        x1: f64,
        /// First corner Y coordinate
        y1: f64,
        /// Opposite corner X coordinate
        x2: f64,
        /// Opposite corner Y coordinate
        y2: f64,
        /// Fixed potential on the conductor
        potential: f64,
    },
}

impl Electrode {
    /// Create a circular electrode centered at (x, y) with radius r
    pub fn circular(x: f64, y: f64, r: f64, potential: f64) -> Self {
        Self::Circular { x, y, r, potential }
    }

    /// Create a rectangular electrode spanning two opposite corners
    pub fn rectangular(x1: f64, y1: f64, x2: f64, y2: f64, potential: f64) -> Self {
        Self::Rectangular {
            x1,
            y1,
            x2,
            y2,
            potential,
        }
    }

    /// Check whether the point (x, y) lies inside the electrode
    ///
    /// Boundaries are inclusive for both shapes.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Self::Circular { x, y, r, .. } => {
                let dx = x - px;
                let dy = y - py;
                dx * dx + dy * dy <= r * r
            }
            Self::Rectangular { x1, y1, x2, y2, .. } => {
                let x_inside = px >= x1.min(x2) && px <= x1.max(x2);
                let y_inside = py >= y1.min(y2) && py <= y1.max(y2);
                x_inside && y_inside
            }
        }
    }

    /// The fixed potential carried by the conductor
    pub fn potential(&self) -> f64 {
        match *self {
            Self::Circular { potential, .. } => potential,
            Self::Rectangular { potential, .. } => potential,
        }
    }
}

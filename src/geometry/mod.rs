//! Problem geometry - a bounded domain holding conducting electrodes

mod electrode;

pub use electrode::Electrode;

use serde::{Deserialize, Serialize};

/// A rectangular domain containing an ordered collection of electrodes
///
/// Electrodes are checked in insertion order; when electrodes overlap, the
/// first-inserted match wins. This ordering matters for which potential a
/// boundary node inherits, so the list is only extended, never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// Lower X bound of the domain
    pub x_min: f64,
    /// Upper X bound of the domain
    pub x_max: f64,
    /// Lower Y bound of the domain
    pub y_min: f64,
    /// Upper Y bound of the domain
    pub y_max: f64,

    electrodes: Vec<Electrode>,
}

impl Geometry {
    /// Create an empty geometry with the given bounding box
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            electrodes: Vec::new(),
        }
    }

    /// Add a circular electrode centered at (x, y) with radius r
    pub fn add_circular(&mut self, x: f64, y: f64, r: f64, potential: f64) {
        self.electrodes.push(Electrode::circular(x, y, r, potential));
    }

    /// Add a rectangular electrode spanning two opposite corners
    pub fn add_rectangular(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, potential: f64) {
        self.electrodes
            .push(Electrode::rectangular(x1, y1, x2, y2, potential));
    }

    /// Add an already-constructed electrode
    pub fn add_electrode(&mut self, electrode: Electrode) {
        self.electrodes.push(electrode);
    }

    /// Classify a point against the electrodes
    ///
    /// Returns the fixed potential of the first electrode (in insertion
    /// order) containing the point, or `None` when the point is not on any
    /// conductor and its potential is unconstrained.
    pub fn classify(&self, x: f64, y: f64) -> Option<f64> {
        self.electrodes
            .iter()
            .find(|el| el.contains(x, y))
            .map(|el| el.potential())
    }

    /// The electrodes in insertion order
    pub fn electrodes(&self) -> &[Electrode] {
        &self.electrodes
    }
}

impl Default for Geometry {
    /// A 200 x 200 domain centered on the origin
    fn default() -> Self {
        Self::new(-100.0, 100.0, -100.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_returns_none_outside_all_electrodes() {
        let mut geometry = Geometry::new(-10.0, 10.0, -10.0, 10.0);
        geometry.add_circular(0.0, 0.0, 2.0, 1.0);

        assert_eq!(geometry.classify(0.0, 0.0), Some(1.0));
        assert_eq!(geometry.classify(5.0, 5.0), None);
    }

    #[test]
    fn overlapping_electrodes_first_match_wins() {
        let mut geometry = Geometry::new(-10.0, 10.0, -10.0, 10.0);
        geometry.add_circular(0.0, 0.0, 3.0, 1.0);
        geometry.add_rectangular(-1.0, -1.0, 1.0, 1.0, -50.0);

        // Both contain the origin; the circle was inserted first.
        assert_eq!(geometry.classify(0.0, 0.0), Some(1.0));
        // Only the circle contains this point.
        assert_eq!(geometry.classify(2.5, 0.0), Some(1.0));
    }

    #[test]
    fn non_overlapping_electrodes_order_independent() {
        let mut a = Geometry::new(-10.0, 10.0, -10.0, 10.0);
        a.add_circular(-5.0, 0.0, 2.0, 1.0);
        a.add_rectangular(3.0, 3.0, 6.0, 6.0, -1.0);

        let mut b = Geometry::new(-10.0, 10.0, -10.0, 10.0);
        b.add_rectangular(3.0, 3.0, 6.0, 6.0, -1.0);
        b.add_circular(-5.0, 0.0, 2.0, 1.0);

        for &(x, y) in &[(-5.0, 0.0), (4.0, 4.0), (0.0, 0.0), (-3.5, 0.0)] {
            assert_eq!(a.classify(x, y), b.classify(x, y));
        }
    }
}

//! Tracking-toolkit sequence adapter.
//!
//! Simulation toolkits hold lattices in memory rather than in survey
//! files. The integration boundary here is deliberately explicit: the
//! caller converts its objects into [`TrackerElement`] values (a closed
//! `(kind, fields)` pair) and hands over anything iterable. There is no
//! runtime type probing; the kind mapping is total and checked by the
//! compiler.
//!
//! Tracker sequences carry no survey, so positions are synthesised: the
//! longitudinal coordinate is the running sum of element lengths and the
//! transverse coordinates stay at zero.

use nalgebra::Point3;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lattice_types::{Beamline, Element};

/// The closed set of element kinds a tracking toolkit can hand over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackerKind {
    /// Zero-length marker.
    Marker,
    /// Beam position monitor.
    Monitor,
    /// Field-free straight section.
    Drift,
    /// Rectangular bend; uses `angle`.
    RBend,
    /// Sector bend; uses `angle`.
    SBend,
    /// Quadrupole; uses `k1`.
    Quadrupole,
    /// Transverse deflecting cavity; uses `voltage`.
    TransverseDeflectingCavity,
    /// Vertical corrector; uses `angle`.
    VerticalCorrector,
    /// Horizontal corrector; uses `angle`.
    HorizontalCorrector,
    /// Accelerating cavity.
    Cavity,
    /// Solenoid; uses `ks`.
    Solenoid,
    /// Insertion device.
    Undulator,
}

/// One element as handed over by a tracking toolkit.
///
/// Only the fields named by the [`TrackerKind`] docs are read for a given
/// kind; the rest stay at zero.
///
/// # Example
///
/// ```
/// use lattice_io::{beamline_from_tracker, TrackerElement, TrackerKind};
///
/// let line = beamline_from_tracker([
///     TrackerElement::new("d1", TrackerKind::Drift, 1.0),
///     TrackerElement::new("qf", TrackerKind::Quadrupole, 0.5).with_k1(0.2),
/// ]);
///
/// assert_eq!(line.len(), 2);
/// assert_eq!(line[1].position.z, 1.5); // running sum of lengths
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerElement {
    /// Element identifier.
    pub name: String,
    /// Element kind.
    pub kind: TrackerKind,
    /// Longitudinal length.
    pub length: f64,
    /// Bend/kick angle in radians.
    pub angle: f64,
    /// Quadrupole gradient.
    pub k1: f64,
    /// Solenoid strength.
    pub ks: f64,
    /// Deflecting voltage.
    pub voltage: f64,
}

impl TrackerElement {
    /// Create an element with all physical fields at zero.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TrackerKind, length: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            length,
            angle: 0.0,
            k1: 0.0,
            ks: 0.0,
            voltage: 0.0,
        }
    }

    /// Set the bend/kick angle.
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the quadrupole gradient.
    #[must_use]
    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    /// Set the solenoid strength.
    #[must_use]
    pub fn with_ks(mut self, ks: f64) -> Self {
        self.ks = ks;
        self
    }

    /// Set the deflecting voltage.
    #[must_use]
    pub fn with_voltage(mut self, voltage: f64) -> Self {
        self.voltage = voltage;
        self
    }
}

/// Build a [`Beamline`] from a tracker sequence.
///
/// The longitudinal coordinate accumulates as the running sum of element
/// lengths; transverse coordinates are fixed at zero (there is no real
/// survey in this path). Infallible: the kind mapping is closed.
pub fn beamline_from_tracker<I>(sequence: I) -> Beamline
where
    I: IntoIterator<Item = TrackerElement>,
{
    let mut s = 0.0;
    let mut elements = Vec::new();

    for ele in sequence {
        s += ele.length;
        let position = Point3::new(0.0, 0.0, s);
        let TrackerElement {
            name,
            kind,
            length,
            angle,
            k1,
            ks,
            voltage,
        } = ele;

        let element = match kind {
            TrackerKind::Marker => Element::marker(name, position),
            TrackerKind::Monitor => Element::monitor(name, position),
            TrackerKind::Drift => Element::drift(name, position, length),
            TrackerKind::RBend => Element::rbend(name, position, length, angle),
            TrackerKind::SBend => Element::sbend(name, position, length, angle),
            TrackerKind::Quadrupole => Element::quadrupole(name, position, length, k1),
            TrackerKind::TransverseDeflectingCavity => {
                Element::transverse_deflecting_cavity(name, position, length, voltage)
            }
            TrackerKind::VerticalCorrector => Element::vkicker(name, position, length, angle),
            TrackerKind::HorizontalCorrector => Element::hkicker(name, position, length, angle),
            TrackerKind::Cavity => Element::rf_cavity(name, position, length),
            TrackerKind::Solenoid => Element::solenoid(name, position, length, ks),
            TrackerKind::Undulator => Element::undulator(name, position, length),
        };
        elements.push(element);
    }

    debug!(elements = elements.len(), "built beamline from tracker sequence");
    Beamline::new(elements)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lattice_types::{ElementKind, ElementTag};

    #[test]
    fn longitudinal_coordinate_accumulates() {
        let line = beamline_from_tracker([
            TrackerElement::new("d1", TrackerKind::Drift, 1.0),
            TrackerElement::new("qf", TrackerKind::Quadrupole, 0.5).with_k1(0.2),
            TrackerElement::new("end", TrackerKind::Marker, 0.0),
        ]);

        assert_eq!(line.len(), 3);
        assert_relative_eq!(line[0].position.z, 1.0);
        assert_relative_eq!(line[1].position.z, 1.5);
        assert_relative_eq!(line[2].position.z, 1.5);
    }

    #[test]
    fn transverse_coordinates_stay_zero() {
        let line = beamline_from_tracker([
            TrackerElement::new("b1", TrackerKind::SBend, 2.0).with_angle(0.05)
        ]);
        assert_relative_eq!(line[0].position.x, 0.0);
        assert_relative_eq!(line[0].position.y, 0.0);
    }

    #[test]
    fn kind_mapping_is_faithful() {
        let line = beamline_from_tracker([
            TrackerElement::new("m", TrackerKind::Marker, 0.0),
            TrackerElement::new("bpm", TrackerKind::Monitor, 0.0),
            TrackerElement::new("vc", TrackerKind::VerticalCorrector, 0.1).with_angle(1e-4),
            TrackerElement::new("hc", TrackerKind::HorizontalCorrector, 0.1).with_angle(2e-4),
            TrackerElement::new("rf", TrackerKind::Cavity, 1.0),
            TrackerElement::new("tdc", TrackerKind::TransverseDeflectingCavity, 1.0)
                .with_voltage(5.0),
            TrackerElement::new("sol", TrackerKind::Solenoid, 0.5).with_ks(0.3),
            TrackerElement::new("und", TrackerKind::Undulator, 2.0),
        ]);

        assert_eq!(line[0].tag(), ElementTag::Marker);
        assert_eq!(line[1].tag(), ElementTag::Monitor);
        assert_eq!(line[2].kind, ElementKind::VKicker { angle: 1e-4 });
        assert_eq!(line[3].kind, ElementKind::HKicker { angle: 2e-4 });
        assert_eq!(line[4].tag(), ElementTag::RFCavity);
        assert_eq!(
            line[5].kind,
            ElementKind::TransverseDeflectingCavity { voltage: 5.0 }
        );
        assert_eq!(line[6].kind, ElementKind::Solenoid { ks: 0.3 });
        assert_eq!(line[7].tag(), ElementTag::Undulator);
    }

    #[test]
    fn markers_are_thin_but_still_advance_s() {
        // A marker with a nominal length contributes to the running sum
        // even though the emitted element is thin.
        let line = beamline_from_tracker([
            TrackerElement::new("m", TrackerKind::Marker, 0.5),
            TrackerElement::new("d", TrackerKind::Drift, 1.0),
        ]);
        assert!(line[0].is_thin());
        assert_relative_eq!(line[0].position.z, 0.5);
        assert_relative_eq!(line[1].position.z, 1.5);
    }
}

//! Lattice element model.
//!
//! An [`Element`] is one entry in a beamline: a name, a survey position, a
//! longitudinal length and an [`ElementKind`] carrying the kind-specific
//! physical payload (bend angle, quadrupole gradient, ...).
//!
//! The set of kinds is closed. Adding a new kind means extending
//! [`ElementKind`] and [`ElementTag`] together; there is no open hierarchy
//! to subclass.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One lattice element: a named, positioned slice of the machine.
///
/// `position` is the element's **end** coordinate: `position.z` is the
/// longitudinal end of the element along the beamline, `position.x` and
/// `position.y` are the transverse survey coordinates at that point. This
/// end-position convention is a deliberate simplification inherited from
/// the survey formats we read.
///
/// A `length` of zero marks a thin element (no longitudinal extent).
/// Negative lengths are not validated; constructing one is left undefined
/// rather than silently clamped.
///
/// # Example
///
/// ```
/// use lattice_types::{Element, ElementKind};
/// use nalgebra::Point3;
///
/// let quad = Element::quadrupole("QF.1", Point3::new(0.0, 0.0, 1.5), 0.5, 0.2);
/// assert_eq!(quad.strength(), Some(0.2));
/// assert!(!quad.is_thin());
///
/// let marker = Element::marker("IP", Point3::new(0.0, 0.0, 1.5));
/// assert!(marker.is_thin());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Element name. Not guaranteed unique within a beamline.
    pub name: String,
    /// End position: transverse x, transverse y, longitudinal z.
    pub position: Point3<f64>,
    /// Longitudinal length in metres. Zero for thin elements.
    pub length: f64,
    /// Kind tag plus kind-specific physical payload.
    pub kind: ElementKind,
}

/// The closed set of element kinds with their physical payloads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// Field-free straight section.
    Drift,
    /// Zero-length survey marker.
    Marker,
    /// Zero-length beam position monitor.
    Monitor,
    /// Rectangular bending dipole.
    RBend {
        /// Bending angle in radians.
        angle: f64,
    },
    /// Sector bending dipole.
    SBend {
        /// Bending angle in radians.
        angle: f64,
    },
    /// Horizontal corrector dipole.
    HKicker {
        /// Kick angle in radians.
        angle: f64,
    },
    /// Vertical corrector dipole.
    VKicker {
        /// Kick angle in radians.
        angle: f64,
    },
    /// Combined corrector dipole.
    Kicker {
        /// Kick angle in radians.
        angle: f64,
    },
    /// Quadrupole magnet.
    Quadrupole {
        /// Normalised gradient (per-length strength).
        k1: f64,
    },
    /// Sextupole magnet.
    Sextupole {
        /// Normalised sextupole strength.
        k2: f64,
    },
    /// Octupole magnet.
    Octupole {
        /// Normalised octupole strength.
        k3: f64,
    },
    /// Solenoid magnet.
    Solenoid {
        /// Solenoid strength.
        ks: f64,
    },
    /// Accelerating RF cavity.
    RFCavity,
    /// Generic cavity (e.g. a MAD8 `LCAV` linac structure).
    Cavity,
    /// Aperture-limiting collimator.
    Collimator,
    /// Arbitrary transfer-map element.
    GenericMap,
    /// Transverse deflecting (crab) cavity.
    TransverseDeflectingCavity {
        /// Peak deflecting voltage.
        voltage: f64,
    },
    /// Insertion device.
    Undulator,
}

/// Payload-free discriminant of [`ElementKind`].
///
/// Used wherever a kind must act as a map key or be named without its
/// physical payload, e.g. the renderer's colour lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementTag {
    /// Field-free straight section.
    Drift,
    /// Zero-length survey marker.
    Marker,
    /// Zero-length beam position monitor.
    Monitor,
    /// Rectangular bending dipole.
    RBend,
    /// Sector bending dipole.
    SBend,
    /// Horizontal corrector dipole.
    HKicker,
    /// Vertical corrector dipole.
    VKicker,
    /// Combined corrector dipole.
    Kicker,
    /// Quadrupole magnet.
    Quadrupole,
    /// Sextupole magnet.
    Sextupole,
    /// Octupole magnet.
    Octupole,
    /// Solenoid magnet.
    Solenoid,
    /// Accelerating RF cavity.
    RFCavity,
    /// Generic cavity.
    Cavity,
    /// Aperture-limiting collimator.
    Collimator,
    /// Arbitrary transfer-map element.
    GenericMap,
    /// Transverse deflecting (crab) cavity.
    TransverseDeflectingCavity,
    /// Insertion device.
    Undulator,
}

/// All tags, in declaration order. Handy for building total lookup tables.
pub const ALL_TAGS: [ElementTag; 18] = [
    ElementTag::Drift,
    ElementTag::Marker,
    ElementTag::Monitor,
    ElementTag::RBend,
    ElementTag::SBend,
    ElementTag::HKicker,
    ElementTag::VKicker,
    ElementTag::Kicker,
    ElementTag::Quadrupole,
    ElementTag::Sextupole,
    ElementTag::Octupole,
    ElementTag::Solenoid,
    ElementTag::RFCavity,
    ElementTag::Cavity,
    ElementTag::Collimator,
    ElementTag::GenericMap,
    ElementTag::TransverseDeflectingCavity,
    ElementTag::Undulator,
];

impl ElementTag {
    /// Human-readable kind name, as used in schematic annotations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drift => "Drift",
            Self::Marker => "Marker",
            Self::Monitor => "Monitor",
            Self::RBend => "RBend",
            Self::SBend => "SBend",
            Self::HKicker => "HKicker",
            Self::VKicker => "VKicker",
            Self::Kicker => "Kicker",
            Self::Quadrupole => "Quadrupole",
            Self::Sextupole => "Sextupole",
            Self::Octupole => "Octupole",
            Self::Solenoid => "Solenoid",
            Self::RFCavity => "RFCavity",
            Self::Cavity => "Cavity",
            Self::Collimator => "Collimator",
            Self::GenericMap => "GenericMap",
            Self::TransverseDeflectingCavity => "TransverseDeflectingCavity",
            Self::Undulator => "Undulator",
        }
    }
}

impl ElementKind {
    /// The payload-free tag of this kind.
    #[must_use]
    pub fn tag(&self) -> ElementTag {
        match self {
            Self::Drift => ElementTag::Drift,
            Self::Marker => ElementTag::Marker,
            Self::Monitor => ElementTag::Monitor,
            Self::RBend { .. } => ElementTag::RBend,
            Self::SBend { .. } => ElementTag::SBend,
            Self::HKicker { .. } => ElementTag::HKicker,
            Self::VKicker { .. } => ElementTag::VKicker,
            Self::Kicker { .. } => ElementTag::Kicker,
            Self::Quadrupole { .. } => ElementTag::Quadrupole,
            Self::Sextupole { .. } => ElementTag::Sextupole,
            Self::Octupole { .. } => ElementTag::Octupole,
            Self::Solenoid { .. } => ElementTag::Solenoid,
            Self::RFCavity => ElementTag::RFCavity,
            Self::Cavity => ElementTag::Cavity,
            Self::Collimator => ElementTag::Collimator,
            Self::GenericMap => ElementTag::GenericMap,
            Self::TransverseDeflectingCavity { .. } => ElementTag::TransverseDeflectingCavity,
            Self::Undulator => ElementTag::Undulator,
        }
    }

    /// Whether the element is carrying current.
    ///
    /// Only the dipole/kicker kinds define a zero-ness rule (a dipole with
    /// zero angle is unpowered). Every other kind reports `true` — note the
    /// quadrupole gradient is deliberately *not* checked.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_powered(&self) -> bool {
        match self {
            Self::RBend { angle }
            | Self::SBend { angle }
            | Self::HKicker { angle }
            | Self::VKicker { angle }
            | Self::Kicker { angle } => *angle != 0.0,
            _ => true,
        }
    }

    /// The single dominant signed strength, where one exists.
    ///
    /// Defined only for kinds whose sign drives rendering polarity;
    /// currently the quadrupole gradient. Callers must treat `None` as
    /// "no strength", never as zero.
    #[must_use]
    pub fn strength(&self) -> Option<f64> {
        match self {
            Self::Quadrupole { k1 } => Some(*k1),
            _ => None,
        }
    }
}

impl Element {
    /// Construct an element from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point3<f64>, length: f64, kind: ElementKind) -> Self {
        Self {
            name: name.into(),
            position,
            length,
            kind,
        }
    }

    /// A drift section.
    #[must_use]
    pub fn drift(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::Drift)
    }

    /// A zero-length marker.
    #[must_use]
    pub fn marker(name: impl Into<String>, position: Point3<f64>) -> Self {
        Self::new(name, position, 0.0, ElementKind::Marker)
    }

    /// A zero-length monitor.
    #[must_use]
    pub fn monitor(name: impl Into<String>, position: Point3<f64>) -> Self {
        Self::new(name, position, 0.0, ElementKind::Monitor)
    }

    /// A rectangular bend.
    #[must_use]
    pub fn rbend(name: impl Into<String>, position: Point3<f64>, length: f64, angle: f64) -> Self {
        Self::new(name, position, length, ElementKind::RBend { angle })
    }

    /// A sector bend.
    #[must_use]
    pub fn sbend(name: impl Into<String>, position: Point3<f64>, length: f64, angle: f64) -> Self {
        Self::new(name, position, length, ElementKind::SBend { angle })
    }

    /// A horizontal kicker.
    #[must_use]
    pub fn hkicker(name: impl Into<String>, position: Point3<f64>, length: f64, angle: f64) -> Self {
        Self::new(name, position, length, ElementKind::HKicker { angle })
    }

    /// A vertical kicker.
    #[must_use]
    pub fn vkicker(name: impl Into<String>, position: Point3<f64>, length: f64, angle: f64) -> Self {
        Self::new(name, position, length, ElementKind::VKicker { angle })
    }

    /// A combined-plane kicker.
    #[must_use]
    pub fn kicker(name: impl Into<String>, position: Point3<f64>, length: f64, angle: f64) -> Self {
        Self::new(name, position, length, ElementKind::Kicker { angle })
    }

    /// A quadrupole with normalised gradient `k1`.
    #[must_use]
    pub fn quadrupole(name: impl Into<String>, position: Point3<f64>, length: f64, k1: f64) -> Self {
        Self::new(name, position, length, ElementKind::Quadrupole { k1 })
    }

    /// A sextupole with normalised strength `k2`.
    #[must_use]
    pub fn sextupole(name: impl Into<String>, position: Point3<f64>, length: f64, k2: f64) -> Self {
        Self::new(name, position, length, ElementKind::Sextupole { k2 })
    }

    /// An octupole with normalised strength `k3`.
    #[must_use]
    pub fn octupole(name: impl Into<String>, position: Point3<f64>, length: f64, k3: f64) -> Self {
        Self::new(name, position, length, ElementKind::Octupole { k3 })
    }

    /// A solenoid with strength `ks`.
    #[must_use]
    pub fn solenoid(name: impl Into<String>, position: Point3<f64>, length: f64, ks: f64) -> Self {
        Self::new(name, position, length, ElementKind::Solenoid { ks })
    }

    /// An accelerating RF cavity.
    #[must_use]
    pub fn rf_cavity(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::RFCavity)
    }

    /// A generic cavity.
    #[must_use]
    pub fn cavity(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::Cavity)
    }

    /// A collimator.
    #[must_use]
    pub fn collimator(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::Collimator)
    }

    /// A generic transfer-map element.
    #[must_use]
    pub fn generic_map(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::GenericMap)
    }

    /// A transverse deflecting cavity with peak voltage `voltage`.
    #[must_use]
    pub fn transverse_deflecting_cavity(
        name: impl Into<String>,
        position: Point3<f64>,
        length: f64,
        voltage: f64,
    ) -> Self {
        Self::new(
            name,
            position,
            length,
            ElementKind::TransverseDeflectingCavity { voltage },
        )
    }

    /// An undulator.
    #[must_use]
    pub fn undulator(name: impl Into<String>, position: Point3<f64>, length: f64) -> Self {
        Self::new(name, position, length, ElementKind::Undulator)
    }

    /// The payload-free tag of this element's kind.
    #[must_use]
    pub fn tag(&self) -> ElementTag {
        self.kind.tag()
    }

    /// Whether this element has zero longitudinal extent.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_thin(&self) -> bool {
        self.length == 0.0
    }

    /// Whether the element is carrying current. See [`ElementKind::is_powered`].
    #[must_use]
    pub fn is_powered(&self) -> bool {
        self.kind.is_powered()
    }

    /// The dominant signed strength, where defined. See [`ElementKind::strength`].
    #[must_use]
    pub fn strength(&self) -> Option<f64> {
        self.kind.strength()
    }
}

//! Colours and the kind-to-colour lookup.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use lattice_types::{ElementTag, ALL_TAGS};

/// An opaque RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Construct a colour from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Purple.
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
    /// Orange.
    pub const ORANGE: Self = Self::rgb(1.0, 0.65, 0.0);
    /// Gray.
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Pink.
    pub const PINK: Self = Self::rgb(1.0, 0.75, 0.8);
    /// Green.
    pub const GREEN: Self = Self::rgb(0.0, 0.5, 0.0);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    /// White.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

/// Immutable element-kind to colour lookup for schematic patches.
///
/// `None` is a valid colour: it means "draw nothing visible" (the patch
/// is emitted fully transparent). Tags missing from a custom map behave
/// the same as an explicit `None`. The map is plain configuration data -
/// the renderer never mutates it.
///
/// # Example
///
/// ```
/// use lattice_draw::{Color, ColorMap};
/// use lattice_types::ElementTag;
///
/// let map = ColorMap::default().with_color(ElementTag::Quadrupole, Some(Color::CYAN));
/// assert_eq!(map.color(ElementTag::Quadrupole), Some(Color::CYAN));
/// assert_eq!(map.color(ElementTag::Drift), None); // invisible by default
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    entries: HashMap<ElementTag, Option<Color>>,
}

impl ColorMap {
    /// A map with no entries; every kind renders invisible.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set the colour for one kind, builder style. `None` hides the kind.
    #[must_use]
    pub fn with_color(mut self, tag: ElementTag, color: Option<Color>) -> Self {
        self.entries.insert(tag, color);
        self
    }

    /// The colour for `tag`, or `None` for hidden/unmapped kinds.
    #[must_use]
    pub fn color(&self, tag: ElementTag) -> Option<Color> {
        self.entries.get(&tag).copied().flatten()
    }

    /// Whether every element kind has an entry (hidden counts).
    #[must_use]
    pub fn is_total(&self) -> bool {
        ALL_TAGS.iter().all(|tag| self.entries.contains_key(tag))
    }
}

impl Default for ColorMap {
    /// The stock palette: magnet families in their conventional colours,
    /// passive elements (drift, marker, monitor) invisible.
    fn default() -> Self {
        Self::empty()
            .with_color(ElementTag::Quadrupole, Some(Color::RED))
            .with_color(ElementTag::SBend, Some(Color::BLUE))
            .with_color(ElementTag::RBend, Some(Color::BLUE))
            .with_color(ElementTag::RFCavity, Some(Color::GRAY))
            .with_color(ElementTag::Marker, None)
            .with_color(ElementTag::Drift, None)
            .with_color(ElementTag::Monitor, None)
            .with_color(ElementTag::HKicker, Some(Color::PURPLE))
            .with_color(ElementTag::VKicker, Some(Color::PURPLE))
            .with_color(ElementTag::Kicker, Some(Color::PURPLE))
            .with_color(ElementTag::Cavity, Some(Color::ORANGE))
            .with_color(ElementTag::Collimator, Some(Color::BLACK))
            .with_color(ElementTag::GenericMap, Some(Color::GRAY))
            .with_color(ElementTag::Solenoid, Some(Color::PINK))
            .with_color(ElementTag::Sextupole, Some(Color::GREEN))
            .with_color(ElementTag::Octupole, Some(Color::GREEN))
            .with_color(ElementTag::TransverseDeflectingCavity, Some(Color::ORANGE))
            .with_color(ElementTag::Undulator, Some(Color::CYAN))
    }
}

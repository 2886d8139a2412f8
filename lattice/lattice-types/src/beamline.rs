//! Ordered beamline container.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Element;

/// An ordered, fixed-length sequence of [`Element`]s.
///
/// Order is file/sequence order, which is physical order along the machine.
/// After construction the length never changes; the only mutation path is
/// [`Beamline::add_offset`], which translates every element in place.
///
/// # Example
///
/// ```
/// use lattice_types::{Beamline, Element};
/// use nalgebra::{Point3, Vector3};
///
/// let mut line = Beamline::new(vec![
///     Element::drift("d1", Point3::new(0.0, 0.0, 1.0), 1.0),
///     Element::marker("end", Point3::new(0.0, 0.0, 1.0)),
/// ]);
/// assert_eq!(line.len(), 2);
///
/// line.add_offset(Vector3::new(0.0, 0.1, 0.0));
/// assert_eq!(line[0].position.y, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Beamline {
    elements: Vec<Element>,
}

impl Beamline {
    /// Build a beamline from a sequence of elements, preserving order.
    #[must_use]
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the beamline holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// All elements as a slice.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate over the elements in machine order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Translate every element's position by `offset`.
    ///
    /// Names, lengths and kinds are untouched. This is the only
    /// post-construction mutation the container supports.
    pub fn add_offset(&mut self, offset: Vector3<f64>) {
        for element in &mut self.elements {
            element.position += offset;
        }
    }
}

impl<I> std::ops::Index<I> for Beamline
where
    I: std::slice::SliceIndex<[Element]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Beamline {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Element> for Beamline {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ElementKind;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn three_element_line() -> Beamline {
        Beamline::new(vec![
            Element::drift("d1", Point3::new(0.0, 0.0, 1.0), 1.0),
            Element::quadrupole("q1", Point3::new(0.0, 0.0, 1.5), 0.5, 0.2),
            Element::marker("end", Point3::new(0.0, 0.0, 1.5)),
        ])
    }

    #[test]
    fn preserves_order_and_length() {
        let line = three_element_line();
        assert_eq!(line.len(), 3);
        assert_eq!(line[0].name, "d1");
        assert_eq!(line[1].name, "q1");
        assert_eq!(line[2].name, "end");
    }

    #[test]
    fn slice_access() {
        let line = three_element_line();
        let tail = &line[1..];
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].name, "q1");
    }

    #[test]
    fn add_offset_translates_every_position() {
        let mut line = three_element_line();
        let before: Vec<_> = line.iter().cloned().collect();

        line.add_offset(Vector3::new(0.1, -0.2, 3.0));

        for (old, new) in before.iter().zip(line.iter()) {
            assert_relative_eq!(new.position.x, old.position.x + 0.1);
            assert_relative_eq!(new.position.y, old.position.y - 0.2);
            assert_relative_eq!(new.position.z, old.position.z + 3.0);
            // Everything else untouched.
            assert_eq!(new.name, old.name);
            assert_relative_eq!(new.length, old.length);
            assert_eq!(new.kind, old.kind);
        }
    }

    #[test]
    fn offset_keeps_kind_payloads() {
        let mut line = three_element_line();
        line.add_offset(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(line[1].kind, ElementKind::Quadrupole { k1: 0.2 });
    }

    #[test]
    fn empty_beamline() {
        let line = Beamline::new(Vec::new());
        assert!(line.is_empty());
        assert_eq!(line.get(0), None);
    }
}

//! Ordered container of child elements.

use super::Element;

/// An ordered, growable list of child elements.
///
/// The element type parameter is how a container restricts what it accepts:
/// a class body is an `ElementContainer<ClassBodyMember>`, a file is an
/// `ElementContainer<Box<dyn Element>>`.
///
/// # Example
///
/// ```
/// use objcgen_codegen::{CommentElement, ElementContainer};
///
/// let mut container = ElementContainer::new();
/// container.add(CommentElement::new("1"), false);
/// container.add(CommentElement::new("0"), true);
///
/// assert_eq!(container.render(), "0\n1");
/// assert_eq!(container.render_joined(" "), "0 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementContainer<E> {
    elements: Vec<E>,
}

impl<E> ElementContainer<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append `element`, or prepend it when `at_front` is set.
    pub fn add(&mut self, element: E, at_front: bool) -> &mut Self {
        if at_front {
            self.elements.insert(0, element);
        } else {
            self.elements.push(element);
        }
        self
    }

    /// Append `element`.
    pub fn push(&mut self, element: E) -> &mut Self {
        self.add(element, false)
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<E: Element> ElementContainer<E> {
    /// Render every child and join them with `separator`.
    pub fn render_joined(&self, separator: &str) -> String {
        self.elements
            .iter()
            .map(Element::render)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Render every child, one per line.
    pub fn render(&self) -> String {
        self.render_joined("\n")
    }
}

impl<E> Default for ElementContainer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for ElementContainer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for ElementContainer<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a ElementContainer<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

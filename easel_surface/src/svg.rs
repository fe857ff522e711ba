// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless in-memory surface with SVG text export.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::{ElementId, ElementKind, PixelBounds, Surface};

/// The SVG namespace, emitted on serialized documents.
const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Debug)]
struct Element {
    kind: ElementKind,
    attributes: Vec<(String, String)>,
    children: Vec<ElementId>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A headless [`Surface`] holding its element tree in memory.
///
/// This surface performs no layout and rasterizes nothing. It:
/// - Stores elements in an arena keyed by [`ElementId`],
/// - Keeps attributes in insertion order, as a host DOM would serialize
///   them,
/// - Reports one configurable [`PixelBounds`] for every element (there is
///   no layout to differentiate them; tests simulate a resize with
///   [`SvgSurface::set_bounds`]),
/// - Can export the viewport subtree as an SVG document via
///   [`SvgSurface::to_svg`].
///
/// It is intended for tests, tools, and server-side use, and doubles as the
/// reference for how a real host should interpret the trait.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    bounds: PixelBounds,
    elements: Vec<Element>,
    roots: Vec<ElementId>,
}

impl SvgSurface {
    /// Creates an empty surface with the given pixel bounds.
    #[must_use]
    pub fn new(bounds: PixelBounds) -> Self {
        Self {
            bounds,
            elements: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Creates a surface holding one top-level mount element registered
    /// under `dom_id`, the way a host page carries a dedicated container
    /// for the canvas.
    #[must_use]
    pub fn with_mount(bounds: PixelBounds, dom_id: &str) -> (Self, ElementId) {
        let mut surface = Self::new(bounds);
        let mount = surface.create_element(ElementKind::Group);
        surface.set_attribute(mount, "id", dom_id);
        surface.push_root(mount);
        (surface, mount)
    }

    /// The configured pixel bounds.
    #[must_use]
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Reconfigures the pixel bounds, simulating a host resize.
    ///
    /// This only changes what [`Surface::bounding_rect`] reports; drive the
    /// canvas's resize handling separately to let it react.
    pub fn set_bounds(&mut self, bounds: PixelBounds) {
        self.bounds = bounds;
    }

    /// Attaches a detached element at the top level of the document.
    pub fn push_root(&mut self, element: ElementId) {
        if self.element(element).is_none() {
            return;
        }
        self.detach(element);
        self.roots.push(element);
    }

    /// The top-level elements in document order.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// The kind of an element, or `None` for a foreign handle.
    #[must_use]
    pub fn kind(&self, element: ElementId) -> Option<ElementKind> {
        self.element(element).map(|e| e.kind)
    }

    /// An element's attribute value, if set.
    #[must_use]
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.element(element)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// An element's attributes in insertion order.
    #[must_use]
    pub fn attributes(&self, element: ElementId) -> &[(String, String)] {
        self.element(element)
            .map(|e| e.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// An element's children in document order.
    #[must_use]
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.element(element)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// The first viewport (`svg`) element in document order, if any.
    #[must_use]
    pub fn viewport(&self) -> Option<ElementId> {
        self.find_in_document(|element| element.kind == ElementKind::Svg)
    }

    /// Serializes the viewport subtree as a standalone SVG document.
    ///
    /// The viewport element gains `xmlns` plus `width`/`height` from the
    /// surface bounds; everything else comes from the stored attributes and
    /// children. Returns an empty string when no viewport element exists.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let Some(root) = self.viewport() else {
            return String::new();
        };
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"{SVG_NS}\" width=\"{}\" height=\"{}\"",
            self.bounds.width, self.bounds.height
        );
        if let Some(element) = self.element(root) {
            for (name, value) in &element.attributes {
                let _ = write!(out, " {name}=\"{value}\"");
            }
            out.push('>');
            for child in &element.children {
                self.write_element(&mut out, *child);
            }
        } else {
            out.push('>');
        }
        out.push_str("</svg>");
        out
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0 as usize)
    }

    /// Removes `id` from the top level and from any parent's child list.
    fn detach(&mut self, id: ElementId) {
        self.roots.retain(|root| *root != id);
        for element in &mut self.elements {
            element.children.retain(|child| *child != id);
        }
    }

    /// Returns `true` when `descendant` sits in the subtree rooted at
    /// `ancestor` (an element is its own ancestor here).
    fn is_in_subtree(&self, ancestor: ElementId, descendant: ElementId) -> bool {
        if ancestor == descendant {
            return true;
        }
        let Some(element) = self.element(ancestor) else {
            return false;
        };
        element
            .children
            .iter()
            .any(|child| self.is_in_subtree(*child, descendant))
    }

    /// Depth-first search over the attached document.
    fn find_in_document(&self, accept: impl Fn(&Element) -> bool) -> Option<ElementId> {
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(element) = self.element(id) else {
                continue;
            };
            if accept(element) {
                return Some(id);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        None
    }

    fn write_element(&self, out: &mut String, id: ElementId) {
        let Some(element) = self.element(id) else {
            return;
        };
        let tag = element.kind.as_str();
        let _ = write!(out, "<{tag}");
        for (name, value) in &element.attributes {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if element.children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in &element.children {
                self.write_element(out, *child);
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

impl Surface for SvgSurface {
    fn find_element(&self, dom_id: &str) -> Option<ElementId> {
        self.find_in_document(|element| {
            element
                .attributes
                .iter()
                .any(|(name, value)| name == "id" && value == dom_id)
        })
    }

    fn create_element(&mut self, kind: ElementKind) -> ElementId {
        let id = u32::try_from(self.elements.len())
            .expect("SvgSurface: too many elements for u32 ElementId");
        self.elements.push(Element::new(kind));
        ElementId(id)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let Some(element) = self.element_mut(element) else {
            return;
        };
        match element.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = value.into(),
            None => element.attributes.push((name.into(), value.into())),
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if self.element(parent).is_none() || self.element(child).is_none() {
            return;
        }
        // An element cannot contain itself or one of its own ancestors.
        if self.is_in_subtree(child, parent) {
            return;
        }
        self.detach(child);
        if let Some(parent) = self.element_mut(parent) {
            parent.children.push(child);
        }
    }

    fn remove_child(&mut self, parent: ElementId, child: ElementId) {
        if let Some(parent) = self.element_mut(parent) {
            parent.children.retain(|existing| *existing != child);
        }
    }

    fn bounding_rect(&self, _element: ElementId) -> PixelBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PixelBounds {
        PixelBounds::new(0.0, 0.0, 800.0, 400.0)
    }

    #[test]
    fn with_mount_registers_findable_element() {
        let (surface, mount) = SvgSurface::with_mount(bounds(), "canvas");

        assert_eq!(surface.find_element("canvas"), Some(mount));
        assert_eq!(surface.kind(mount), Some(ElementKind::Group));
        assert_eq!(surface.roots(), [mount]);
    }

    #[test]
    fn find_element_misses_unknown_and_detached_ids() {
        let (mut surface, _mount) = SvgSurface::with_mount(bounds(), "canvas");

        assert_eq!(surface.find_element("editor"), None);

        // A detached element is not part of the document.
        let floating = surface.create_element(ElementKind::Rect);
        surface.set_attribute(floating, "id", "floating");
        assert_eq!(surface.find_element("floating"), None);
    }

    #[test]
    fn find_element_descends_into_children() {
        let (mut surface, mount) = SvgSurface::with_mount(bounds(), "canvas");
        let root = surface.create_element(ElementKind::Svg);
        surface.append_child(mount, root);
        let rect = surface.create_element(ElementKind::Rect);
        surface.set_attribute(rect, "id", "node-1");
        surface.append_child(root, rect);

        assert_eq!(surface.find_element("node-1"), Some(rect));
    }

    #[test]
    fn set_attribute_replaces_value_in_place() {
        let mut surface = SvgSurface::new(bounds());
        let line = surface.create_element(ElementKind::Line);

        surface.set_attribute(line, "x1", "0");
        surface.set_attribute(line, "y1", "0");
        surface.set_attribute(line, "x1", "-50");

        assert_eq!(surface.attribute(line, "x1"), Some("-50"));
        // Replacement keeps the original attribute order.
        let names: Vec<&str> = surface
            .attributes(line)
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, ["x1", "y1"]);
    }

    #[test]
    fn operations_on_foreign_handles_are_noops() {
        let mut surface = SvgSurface::new(bounds());
        let real = surface.create_element(ElementKind::Group);
        let foreign = ElementId(999);

        surface.set_attribute(foreign, "id", "ghost");
        surface.append_child(real, foreign);
        surface.append_child(foreign, real);
        surface.remove_child(foreign, real);

        assert!(surface.children(real).is_empty());
        assert_eq!(surface.find_element("ghost"), None);
    }

    #[test]
    fn append_child_moves_an_attached_element() {
        let mut surface = SvgSurface::new(bounds());
        let first = surface.create_element(ElementKind::Group);
        let second = surface.create_element(ElementKind::Group);
        let rect = surface.create_element(ElementKind::Rect);

        surface.append_child(first, rect);
        surface.append_child(second, rect);

        assert!(surface.children(first).is_empty());
        assert_eq!(surface.children(second), [rect]);
    }

    #[test]
    fn append_child_refuses_cycles() {
        let mut surface = SvgSurface::new(bounds());
        let outer = surface.create_element(ElementKind::Group);
        let inner = surface.create_element(ElementKind::Group);
        surface.append_child(outer, inner);

        surface.append_child(inner, outer);
        surface.append_child(outer, outer);

        assert_eq!(surface.children(outer), [inner]);
        assert!(surface.children(inner).is_empty());
    }

    #[test]
    fn remove_child_detaches_and_tolerates_absence() {
        let mut surface = SvgSurface::new(bounds());
        let group = surface.create_element(ElementKind::Group);
        let rect = surface.create_element(ElementKind::Rect);
        surface.append_child(group, rect);

        surface.remove_child(group, rect);
        assert!(surface.children(group).is_empty());

        // Removing again, or removing something never attached, is fine.
        surface.remove_child(group, rect);
        surface.remove_child(group, ElementId(999));
        assert!(surface.children(group).is_empty());

        // The detached element's handle is still usable.
        assert_eq!(surface.kind(rect), Some(ElementKind::Rect));
    }

    #[test]
    fn bounding_rect_reports_surface_bounds_for_every_element() {
        let mut surface = SvgSurface::new(bounds());
        let group = surface.create_element(ElementKind::Group);
        let rect = surface.create_element(ElementKind::Rect);
        surface.append_child(group, rect);

        assert_eq!(surface.bounding_rect(group), bounds());
        assert_eq!(surface.bounding_rect(rect), bounds());

        let resized = PixelBounds::new(0.0, 0.0, 640.0, 480.0);
        surface.set_bounds(resized);
        assert_eq!(surface.bounding_rect(rect), resized);
    }

    #[test]
    fn to_svg_serializes_the_viewport_subtree() {
        let (mut surface, mount) = SvgSurface::with_mount(bounds(), "canvas");
        let root = surface.create_element(ElementKind::Svg);
        surface.set_attribute(root, "viewBox", "-100 -50 200 100");
        surface.append_child(mount, root);

        let group = surface.create_element(ElementKind::Group);
        surface.append_child(root, group);
        let line = surface.create_element_with(
            ElementKind::Line,
            &[("x1", "-50"), ("x2", "-50"), ("y1", "-50"), ("y2", "50")],
        );
        surface.append_child(group, line);

        let svg = surface.to_svg();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"400\" \
             viewBox=\"-100 -50 200 100\">\
             <g><line x1=\"-50\" x2=\"-50\" y1=\"-50\" y2=\"50\"/></g>\
             </svg>"
        );
    }

    #[test]
    fn to_svg_without_viewport_is_empty() {
        let (surface, _mount) = SvgSurface::with_mount(bounds(), "canvas");
        assert_eq!(surface.to_svg(), "");
    }
}

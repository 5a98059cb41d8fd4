//! Document model: placed elements and the persisted, ordered store.
//!
//! This module defines what is on the board (`Element`, `ElementKind`), the
//! editable field set shared by create and edit (`ElementFields`), and the
//! runtime store that owns every live element (`ElementStore`).
//!
//! Insertion order is render order. The store writes the full collection to
//! its [`SnapshotRepository`] after every mutation call and rehydrates from it
//! on [`ElementStore::open`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, ELEMENT_ID_PREFIX};
use crate::render::{ButtonWidget, InputWidget, LabelWidget, Widget};
use crate::storage::SnapshotRepository;

/// Unique identifier for an element, rendered as `element-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Build the id for sequence number `seq`.
    #[must_use]
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("{ELEMENT_ID_PREFIX}{seq}"))
    }

    /// The numeric suffix, if this id has the generated `element-<n>` shape.
    #[must_use]
    pub fn seq(&self) -> Option<u64> {
        match self.0.strip_prefix(ELEMENT_ID_PREFIX)?.parse() {
            Ok(seq) => Some(seq),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The kind of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Static text block.
    Label,
    /// Single-line text field.
    Input,
    /// Push button.
    Button,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 3] = [ElementKind::Label, ElementKind::Input, ElementKind::Button];

    /// Rendering strategy for this kind.
    #[must_use]
    pub fn widget(self) -> &'static dyn Widget {
        match self {
            Self::Label => &LabelWidget,
            Self::Input => &InputWidget,
            Self::Button => &ButtonWidget,
        }
    }

    /// Lowercase wire name (`"label"`, `"input"`, `"button"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Input => "input",
            Self::Button => "button",
        }
    }
}

/// An element as stored, exported, and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Palette type.
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Distance from the top edge of the board, in CSS pixels.
    #[serde(serialize_with = "whole_as_integer")]
    pub top: f64,
    /// Distance from the left edge of the board, in CSS pixels.
    #[serde(serialize_with = "whole_as_integer")]
    pub left: f64,
    /// Label text, input value, or button caption.
    #[serde(default)]
    pub text: String,
    /// Font size in CSS pixels.
    #[serde(default = "default_font_size", serialize_with = "whole_as_integer")]
    pub font_size: f64,
    /// CSS font-weight descriptor.
    #[serde(default = "default_font_weight", deserialize_with = "weight_from_str_or_number")]
    pub font_weight: String,
}

impl Element {
    /// Copy of the editable fields.
    #[must_use]
    pub fn fields(&self) -> ElementFields {
        ElementFields {
            top: self.top,
            left: self.left,
            text: self.text.clone(),
            font_size: self.font_size,
            font_weight: self.font_weight.clone(),
        }
    }
}

fn default_font_size() -> f64 {
    DEFAULT_FONT_SIZE
}

fn default_font_weight() -> String {
    DEFAULT_FONT_WEIGHT.to_owned()
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers as JSON integers, so an imported `10` exports as `10`
/// rather than `10.0`.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Accept `"bold"` as well as `700` for the font weight.
fn weight_from_str_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Weight {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Weight::deserialize(deserializer)? {
        Weight::Text(s) => s,
        Weight::Number(n) => n.to_string(),
    })
}

/// Every field an edit can change. Also the shape of the editor draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFields {
    pub top: f64,
    pub left: f64,
    pub text: String,
    pub font_size: f64,
    pub font_weight: String,
}

impl ElementFields {
    /// Fields for a new element dropped at (`top`, `left`) with empty text.
    #[must_use]
    pub fn at(top: f64, left: f64, font_size: f64, font_weight: impl Into<String>) -> Self {
        Self { top, left, text: String::new(), font_size, font_weight: font_weight.into() }
    }
}

impl Default for ElementFields {
    fn default() -> Self {
        Self::at(0.0, 0.0, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT)
    }
}

/// Sequence number to hand out next so no loaded id is reused.
fn next_seq_after(elements: &[Element]) -> u64 {
    let past_max = elements
        .iter()
        .filter_map(|e| e.id.seq())
        .max()
        .map_or(0, |max| max.saturating_add(1));
    past_max.max(elements.len() as u64)
}

/// Ordered, persisted store of board elements.
pub struct ElementStore<R> {
    elements: Vec<Element>,
    next_seq: u64,
    repo: R,
}

impl<R: SnapshotRepository> ElementStore<R> {
    /// Rehydrate from `repo`. An empty or unreadable repository yields an empty store.
    pub fn open(repo: R) -> Self {
        let elements = match repo.load() {
            Ok(Some(elements)) => elements,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("discarding unreadable stored board: {e}");
                Vec::new()
            }
        };
        log::debug!("element store opened with {} elements", elements.len());
        let next_seq = next_seq_after(&elements);
        Self { elements, next_seq, repo }
    }

    /// Append a new element with a fresh id. Field values are not validated.
    pub fn create(&mut self, kind: ElementKind, fields: ElementFields) -> Element {
        let id = ElementId::from_seq(self.next_seq);
        self.next_seq = self.next_seq.saturating_add(1);
        let element = Element {
            id,
            kind,
            top: fields.top,
            left: fields.left,
            text: fields.text,
            font_size: fields.font_size,
            font_weight: fields.font_weight,
        };
        self.elements.push(element.clone());
        self.persist();
        element
    }

    /// Set the position of `id`. Returns false when no element matches.
    pub fn move_to(&mut self, id: &ElementId, top: f64, left: f64) -> bool {
        let found = match self.elements.iter_mut().find(|e| &e.id == id) {
            Some(element) => {
                element.top = top;
                element.left = left;
                true
            }
            None => {
                log::debug!("move ignored: no element {id}");
                false
            }
        };
        self.persist();
        found
    }

    /// Replace every editable field of `id`. Returns false when no element matches.
    pub fn edit(&mut self, id: &ElementId, fields: ElementFields) -> bool {
        let found = match self.elements.iter_mut().find(|e| &e.id == id) {
            Some(element) => {
                element.top = fields.top;
                element.left = fields.left;
                element.text = fields.text;
                element.font_size = fields.font_size;
                element.font_weight = fields.font_weight;
                true
            }
            None => {
                log::debug!("edit ignored: no element {id}");
                false
            }
        };
        self.persist();
        found
    }

    /// Remove `id`, returning it if it was present.
    pub fn delete(&mut self, id: &ElementId) -> Option<Element> {
        let removed = self
            .elements
            .iter()
            .position(|e| &e.id == id)
            .map(|index| self.elements.remove(index));
        if removed.is_none() {
            log::debug!("delete ignored: no element {id}");
        }
        self.persist();
        removed
    }

    /// Replace the whole collection (import).
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.next_seq = self.next_seq.max(next_seq_after(&elements));
        self.elements = elements;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.repo.save(&self.elements) {
            log::warn!("failed to persist board: {e}");
        }
    }

    /// All elements in render order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Owned copy of the collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// The injected repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

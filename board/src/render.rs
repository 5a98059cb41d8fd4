//! Per-type widget strategies.
//!
//! Each [`ElementKind`] maps to one [`Widget`] through
//! [`ElementKind::widget`]. A widget describes how its element appears: the
//! palette label, the HTML tag and frame class, whether it takes focus, and
//! where the element text goes. The host turns that description into DOM.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{SELECTED_BORDER, WIDGET_PADDING_PX};
use crate::doc::{Element, ElementKind};

/// Where a widget puts the element text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetContent {
    /// Rendered as the element's child text.
    Text(String),
    /// Rendered as a form value, with a placeholder for the empty case.
    Value { value: String, placeholder: &'static str },
}

/// Rendering capability of one element kind.
pub trait Widget: Sync {
    /// The kind this widget renders.
    fn kind(&self) -> ElementKind;

    /// Human-readable name shown in the sidebar palette.
    fn palette_label(&self) -> &'static str;

    /// HTML tag of the inner control.
    fn tag(&self) -> &'static str;

    /// CSS class of the positioned frame around the control.
    fn frame_class(&self) -> &'static str {
        "board__item"
    }

    /// Whether the control needs an explicit `tabindex` to receive focus.
    fn needs_tabindex(&self) -> bool {
        false
    }

    /// Content model for `element`.
    fn content(&self, element: &Element) -> WidgetContent {
        WidgetContent::Text(element.text.clone())
    }
}

/// Static text block.
pub struct LabelWidget;

impl Widget for LabelWidget {
    fn kind(&self) -> ElementKind {
        ElementKind::Label
    }

    fn palette_label(&self) -> &'static str {
        "Label"
    }

    fn tag(&self) -> &'static str {
        "div"
    }

    fn needs_tabindex(&self) -> bool {
        true
    }
}

/// Read-only text field showing the element text as its value.
pub struct InputWidget;

impl Widget for InputWidget {
    fn kind(&self) -> ElementKind {
        ElementKind::Input
    }

    fn palette_label(&self) -> &'static str {
        "Input"
    }

    fn tag(&self) -> &'static str {
        "input"
    }

    fn content(&self, element: &Element) -> WidgetContent {
        WidgetContent::Value { value: element.text.clone(), placeholder: "Enter Value" }
    }
}

/// Push button captioned with the element text.
pub struct ButtonWidget;

impl Widget for ButtonWidget {
    fn kind(&self) -> ElementKind {
        ElementKind::Button
    }

    fn palette_label(&self) -> &'static str {
        "Button"
    }

    fn tag(&self) -> &'static str {
        "button"
    }

    fn frame_class(&self) -> &'static str {
        "board__item board__item--button"
    }
}

/// Inline style positioning the frame of `element` on the board.
#[must_use]
pub fn frame_style(element: &Element) -> String {
    format!("top: {}px; left: {}px;", element.top, element.left)
}

/// Inline style of the inner control: font, padding, and selection border.
#[must_use]
pub fn control_style(element: &Element, selected: bool) -> String {
    let border = if selected { SELECTED_BORDER } else { "none" };
    format!(
        "font-size: {}px; font-weight: {}; padding: {WIDGET_PADDING_PX}px; border: {border};",
        element.font_size, element.font_weight
    )
}

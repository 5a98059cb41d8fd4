//! Leptos views for each widget strategy.
//!
//! `board::render` describes a widget; this module turns each description into
//! DOM. [`view_for`] is the single place an element kind is mapped to its view.

use board::doc::{Element, ElementKind};
use board::render::{ButtonWidget, InputWidget, LabelWidget, Widget, WidgetContent, control_style};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// A widget that can render itself as a Leptos view.
pub trait ElementView: Widget {
    /// Inner control for `element`, bordered when `selected`.
    fn view(&self, element: &Element, selected: bool) -> AnyView;
}

/// View strategy for `kind`.
pub fn view_for(kind: ElementKind) -> &'static dyn ElementView {
    match kind {
        ElementKind::Label => &LabelWidget,
        ElementKind::Input => &InputWidget,
        ElementKind::Button => &ButtonWidget,
    }
}

fn text_of(content: WidgetContent) -> String {
    match content {
        WidgetContent::Text(text) | WidgetContent::Value { value: text, .. } => text,
    }
}

impl ElementView for LabelWidget {
    fn view(&self, element: &Element, selected: bool) -> AnyView {
        let text = text_of(self.content(element));
        view! {
            <div
                class="board__control"
                tabindex=self.needs_tabindex().then_some("0")
                style=control_style(element, selected)
            >
                {text}
            </div>
        }
        .into_any()
    }
}

impl ElementView for InputWidget {
    fn view(&self, element: &Element, selected: bool) -> AnyView {
        let (value, placeholder) = match self.content(element) {
            WidgetContent::Value { value, placeholder } => (value, placeholder),
            WidgetContent::Text(text) => (text, ""),
        };
        view! {
            <input
                class="board__control"
                type="text"
                readonly=true
                placeholder=placeholder
                prop:value=value
                style=control_style(element, selected)
            />
        }
        .into_any()
    }
}

impl ElementView for ButtonWidget {
    fn view(&self, element: &Element, selected: bool) -> AnyView {
        let text = text_of(self.content(element));
        view! {
            <button class="board__control" type="button" style=control_style(element, selected)>
                {text}
            </button>
        }
        .into_any()
    }
}

//! Side effects produced by features and applied to a [`Page`].
//!
//! Effects aimed at a detached or unknown node are dropped silently: a feature
//! acting on an element that disappeared under it must not fail.

use crate::page::{Element, NodeId, Page};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Sets (`Some`) or clears (`None`) an inline style property.
    SetStyle { node: NodeId, property: &'static str, value: Option<String> },
    AddClass { node: NodeId, class: &'static str },
    RemoveClass { node: NodeId, class: &'static str },
    SetAttribute { node: NodeId, name: &'static str, value: String },
    SetText { node: NodeId, text: String },
    SetDisabled { node: NodeId, disabled: bool },
    /// Sets a form control's current value.
    SetValue { node: NodeId, value: String },
    /// Drops the node's children, stores `markup` as its content and attaches `children`.
    ReplaceChildren { node: NodeId, markup: String, children: Vec<Element> },
    /// Clears every named field under the form.
    ResetForm { node: NodeId },
    /// Removes the node and its subtree from the document.
    Detach { node: NodeId },
}

impl Effect {
    /// The node this effect targets.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        match self {
            Self::SetStyle { node, .. }
            | Self::AddClass { node, .. }
            | Self::RemoveClass { node, .. }
            | Self::SetAttribute { node, .. }
            | Self::SetText { node, .. }
            | Self::SetDisabled { node, .. }
            | Self::SetValue { node, .. }
            | Self::ReplaceChildren { node, .. }
            | Self::ResetForm { node }
            | Self::Detach { node } => *node,
        }
    }
}

impl Page {
    /// Applies one effect. Returns `false` when the target was not attached.
    pub fn apply(&mut self, effect: Effect) -> bool {
        let node = effect.node();
        if !self.is_attached(node) {
            trace!(?effect, "Dropping effect for detached node");
            return false;
        }

        match effect {
            Effect::SetStyle { property, value, .. } => {
                self.with_element(node, |el| el.set_style(property, value.as_deref()));
            },
            Effect::AddClass { class, .. } => self.with_element(node, |el| el.add_class(class)),
            Effect::RemoveClass { class, .. } => {
                self.with_element(node, |el| el.remove_class(class));
            },
            Effect::SetAttribute { name, value, .. } => {
                self.with_element(node, |el| el.set_attribute(name, &value));
            },
            Effect::SetText { text, .. } => self.with_element(node, |el| el.set_text(&text)),
            Effect::SetDisabled { disabled, .. } => {
                self.with_element(node, |el| el.set_disabled(disabled));
            },
            Effect::SetValue { value, .. } => self.with_element(node, |el| el.set_value(&value)),
            Effect::ReplaceChildren { markup, children, .. } => {
                for child in self.children(node) {
                    self.detach(child);
                }
                self.with_element(node, |el| el.set_markup(&markup));
                for child in children {
                    self.append(node, child);
                }
            },
            Effect::ResetForm { .. } => {
                let fields: Vec<NodeId> = self.descendants(node, |el| el.name().is_some()).collect();
                for field in fields {
                    self.with_element(field, |el| el.set_value(""));
                }
            },
            Effect::Detach { .. } => self.detach(node),
        }
        true
    }

    /// Applies effects in order, returning how many landed.
    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = Effect>) -> usize {
        effects.into_iter().map(|effect| self.apply(effect)).filter(|&landed| landed).count()
    }

    fn with_element(&mut self, node: NodeId, f: impl FnOnce(&mut Element)) {
        if let Some(el) = self.element_mut(node) {
            f(el);
        }
    }
}

use crate::page::NodeId;

/// Keyboard keys the features care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Anything else, as reported by the host (`KeyboardEvent.key`).
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Host events dispatched to every feature after page-ready.
///
/// For `Resize` and `Scroll` the page viewport is already updated when features see the event,
/// and for `Layout` the node's rect is.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { target: NodeId },
    KeyDown { key: Key },
    /// A form submission; the default action is always suppressed.
    Submit { form: NodeId },
    Resize { width: f64, height: f64 },
    Scroll { y: f64 },
    /// Host layout moved or resized a node.
    Layout { node: NodeId },
    /// A node left the document.
    Detached { node: NodeId },
}

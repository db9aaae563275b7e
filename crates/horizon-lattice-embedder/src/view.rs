//! The surfaces the embedder talks to: embedded views and the host's event
//! channel.

use crate::ids::{EmbeddedViewHandle, OriginId};
use crate::native::{AccessibilityEvent, ActionArguments, ActionId, MotionEvent, NativeNode};

/// A view that owns its own accessibility tree.
///
/// Only views that expose an [`AccessibilityNodeProvider`] can be mirrored
/// beyond their root node.
pub trait EmbeddedView: Send + Sync {
    /// Create the accessibility node for the view itself.
    fn create_accessibility_node(&self) -> Option<NativeNode>;

    /// The provider for the view's virtual node tree, if it has one.
    fn accessibility_node_provider(&self) -> Option<&dyn AccessibilityNodeProvider>;

    /// Deliver a generic motion event in the view's own coordinate space.
    ///
    /// Returns `true` if the view consumed the event.
    fn dispatch_generic_motion_event(&self, event: &MotionEvent) -> bool;
}

/// Access to an embedded view's virtual accessibility nodes.
pub trait AccessibilityNodeProvider {
    /// Create the node for `id`, or `None` if the view has no such node.
    fn create_accessibility_node(&self, id: OriginId) -> Option<NativeNode>;

    /// Perform `action` on the node `id`. Returns `true` if it was performed.
    fn perform_action(
        &self,
        id: OriginId,
        action: ActionId,
        arguments: Option<&ActionArguments>,
    ) -> bool;
}

/// The host's channel for publishing accessibility events.
pub trait HostEventSink: Send + Sync {
    /// Publish an event whose ids are all in host space.
    ///
    /// `origin` is the embedded view that raised the event. Returns `true` if
    /// the event was sent.
    fn request_send_accessibility_event(
        &self,
        origin: EmbeddedViewHandle,
        event: AccessibilityEvent,
    ) -> bool;
}

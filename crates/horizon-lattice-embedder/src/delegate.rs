//! Events, actions and hover probes crossing the embedding boundary.
//!
//! Events raised by an embedded view travel out to the host with every node
//! id rewritten into host space. Actions and hover probes addressed to host
//! ids travel in, rewritten into the embedded view's ids and coordinates.

use crate::capability::IdCapability;
use crate::embedder::AccessibilityEmbedder;
use crate::error::{EmbedError, EmbedResult};
use crate::geometry::to_embedded_space;
use crate::ids::{EmbeddedNodeRef, EmbeddedViewHandle, HostId};
use crate::logging::targets;
use crate::native::{
    AccessibilityEvent, ActionArguments, ActionId, EventRecord, MotionEvent, NodeSource,
};

impl AccessibilityEmbedder {
    /// Translate an event raised by `view` into host ids and publish it
    /// through the host's event sink.
    ///
    /// The event's own source gets a host id, allocated if needed. Every
    /// additional record must already be mapped; if any is not, the event is
    /// dropped whole and `false` is returned.
    pub fn translate_and_forward_event(
        &self,
        view: EmbeddedViewHandle,
        origin: EmbeddedViewHandle,
        event: &AccessibilityEvent,
    ) -> bool {
        match self.translate_event(view, event) {
            Ok(translated) => self.host.request_send_accessibility_event(origin, translated),
            Err(error) => {
                tracing::debug!(
                    target: targets::EVENTS,
                    %error,
                    event_type = ?event.event_type,
                    "dropping embedded accessibility event"
                );
                false
            }
        }
    }

    /// Produce a copy of `event` whose node ids are all host ids.
    pub fn translate_event(
        &self,
        view: EmbeddedViewHandle,
        event: &AccessibilityEvent,
    ) -> EmbedResult<AccessibilityEvent> {
        let source = self
            .ids
            .record_source_id(&event.record)
            .ok_or(EmbedError::CapabilityUnavailable(IdCapability::RecordSource))?;

        let mut state = self.state.lock();
        if !state.views.contains_key(view) {
            return Err(EmbedError::UnknownView);
        }

        let mut translated = event.clone();
        let source_id = state
            .registry
            .lookup_or_allocate(EmbeddedNodeRef::new(view, source));
        translated.record.source = NodeSource::Host(source_id);

        for (index, record) in translated.records.iter_mut().enumerate() {
            let host_id = self
                .ids
                .record_source_id(record)
                .and_then(|origin| {
                    state
                        .registry
                        .resolve_origin(EmbeddedNodeRef::new(view, origin))
                })
                .ok_or(EmbedError::UnmappedRecord { index })?;
            record.source = NodeSource::Host(host_id);
        }
        Ok(translated)
    }

    /// Perform `action` on the embedded node mapped to `id`.
    ///
    /// Returns the embedded view's answer, or `false` if `id` is unmapped or
    /// the view has no virtual tree.
    pub fn perform_action(
        &self,
        id: HostId,
        action: ActionId,
        arguments: Option<&ActionArguments>,
    ) -> bool {
        self.try_perform_action(id, action, arguments)
            .unwrap_or_else(|error| {
                tracing::debug!(target: targets::EVENTS, %error, %id, ?action, "action not delivered");
                false
            })
    }

    fn try_perform_action(
        &self,
        id: HostId,
        action: ActionId,
        arguments: Option<&ActionArguments>,
    ) -> EmbedResult<bool> {
        let (origin, view) = {
            let state = self.state.lock();
            let origin = state.resolve(id)?;
            (origin, state.view(origin.view)?)
        };
        let provider = view
            .accessibility_node_provider()
            .ok_or(EmbedError::NoVirtualTree)?;
        Ok(provider.perform_action(origin.origin, action, arguments))
    }

    /// The host id of the node `record` is about, without allocating.
    pub fn record_host_id(&self, view: EmbeddedViewHandle, record: &EventRecord) -> Option<HostId> {
        let origin = self.ids.record_source_id(record)?;
        self.state
            .lock()
            .registry
            .resolve_origin(EmbeddedNodeRef::new(view, origin))
    }

    /// Forward a hover probe aimed at the embedded view that owns `id`.
    ///
    /// Pointer positions are moved from host screen space into the view's
    /// own space; everything else about the event is kept. Returns whether
    /// the view consumed the event.
    pub fn forward_hover_probe(&self, id: HostId, event: &MotionEvent) -> bool {
        let target = {
            let state = self.state.lock();
            state.resolve(id).and_then(|origin| {
                let bounds = state
                    .bounds
                    .bounds(origin.view)
                    .ok_or(EmbedError::MissingDisplayBounds)?;
                Ok((state.view(origin.view)?, bounds))
            })
        };

        match target {
            Ok((view, bounds)) => {
                let translated = event.map_positions(|point| to_embedded_space(point, &bounds));
                view.dispatch_generic_motion_event(&translated)
            }
            Err(error) => {
                tracing::debug!(target: targets::EVENTS, %error, %id, "hover probe not forwarded");
                false
            }
        }
    }
}

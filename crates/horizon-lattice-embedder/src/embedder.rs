//! The embedder: mirrors embedded views' accessibility trees into the host tree.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::SlotMap;
use static_assertions::assert_impl_all;

use crate::attributes::supported_attribute_names;
use crate::bounds::DisplayBoundsRegistry;
use crate::capability::{IdCapability, IdIntrospection, IdShim};
use crate::config::EmbedderConfig;
use crate::error::{EmbedError, EmbedResult};
use crate::geometry::Rect;
use crate::ids::{EmbeddedNodeRef, EmbeddedViewHandle, HostId};
use crate::logging::targets;
use crate::mirror::{MirroredNode, NodeMirror};
use crate::registry::IdRegistry;
use crate::view::{EmbeddedView, HostEventSink};

/// Mutable state shared by every bridging operation.
pub(crate) struct EmbedderState {
    pub(crate) views: SlotMap<EmbeddedViewHandle, Arc<dyn EmbeddedView>>,
    pub(crate) registry: IdRegistry,
    pub(crate) bounds: DisplayBoundsRegistry,
}

impl EmbedderState {
    pub(crate) fn view(&self, handle: EmbeddedViewHandle) -> EmbedResult<Arc<dyn EmbeddedView>> {
        self.views.get(handle).cloned().ok_or(EmbedError::UnknownView)
    }

    pub(crate) fn resolve(&self, id: HostId) -> EmbedResult<EmbeddedNodeRef> {
        self.registry
            .resolve_host_id(id)
            .ok_or(EmbedError::UnknownHostId(id))
    }
}

/// Presents the accessibility trees of embedded views as subtrees of a host
/// accessibility tree.
///
/// Embedded nodes get host ids lazily, the first time the embedder meets them
/// as a root, a child or an event source. Once mapped, a node keeps its host
/// id until its view is detached, and host ids are never reused.
///
/// All state sits behind one mutex, so the embedder can be shared across
/// threads. The lock is never held while calling into an embedded view or
/// the host's event sink.
///
/// # Example
///
/// ```ignore
/// let embedder = AccessibilityEmbedder::new(
///     EmbedderConfig::new().package_name("com.example.app"),
///     Box::new(PackedIdAccessors::new()),
///     host_sink,
/// );
///
/// let view = embedder.register_view(web_view);
/// let root = embedder.get_root_node(view, HostId(42), display_rect);
/// ```
pub struct AccessibilityEmbedder {
    pub(crate) config: EmbedderConfig,
    pub(crate) ids: IdShim,
    pub(crate) host: Arc<dyn HostEventSink>,
    pub(crate) state: Mutex<EmbedderState>,
}

assert_impl_all!(AccessibilityEmbedder: Send, Sync);

impl AccessibilityEmbedder {
    /// Create an embedder.
    ///
    /// `introspection` reads internal ids out of embedded nodes; `host`
    /// publishes translated events.
    pub fn new(
        config: EmbedderConfig,
        introspection: Box<dyn IdIntrospection>,
        host: Arc<dyn HostEventSink>,
    ) -> Self {
        let registry = IdRegistry::new(config.first_virtual_node_id);
        tracing::debug!(
            target: targets::EMBEDDER,
            tier = ?config.attribute_tier,
            attributes = ?supported_attribute_names(config.attribute_tier).collect::<Vec<_>>(),
            "mirroring node attributes"
        );
        Self {
            config,
            ids: IdShim::new(introspection),
            host,
            state: Mutex::new(EmbedderState {
                views: SlotMap::with_key(),
                registry,
                bounds: DisplayBoundsRegistry::new(),
            }),
        }
    }

    /// The configuration this embedder was created with.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }

    /// Register an embedded view and return its handle.
    pub fn register_view(&self, view: Arc<dyn EmbeddedView>) -> EmbeddedViewHandle {
        let handle = self.state.lock().views.insert(view);
        tracing::debug!(target: targets::EMBEDDER, ?handle, "registered embedded view");
        handle
    }

    /// Forget an embedded view, its display bounds and all its id mappings.
    ///
    /// Host ids it used are not handed out again. Returns `false` if the
    /// handle was not registered.
    pub fn detach_view(&self, handle: EmbeddedViewHandle) -> bool {
        let mut state = self.state.lock();
        if state.views.remove(handle).is_none() {
            return false;
        }
        state.bounds.remove(handle);
        let dropped = state.registry.remove_view(handle);
        tracing::debug!(
            target: targets::EMBEDDER,
            ?handle,
            dropped,
            "detached embedded view"
        );
        true
    }

    /// Record where `handle` is displayed, in host screen coordinates.
    pub fn set_display_bounds(&self, handle: EmbeddedViewHandle, bounds: Rect) -> bool {
        let mut state = self.state.lock();
        if !state.views.contains_key(handle) {
            return false;
        }
        state.bounds.set_bounds(handle, bounds);
        true
    }

    /// The last display bounds recorded for `handle`.
    pub fn display_bounds(&self, handle: EmbeddedViewHandle) -> Option<Rect> {
        self.state.lock().bounds.bounds(handle)
    }

    /// The host id for an embedded node, allocating one if it is unmapped.
    pub fn lookup_or_allocate(&self, origin: EmbeddedNodeRef) -> HostId {
        self.state.lock().registry.lookup_or_allocate(origin)
    }

    /// The embedded node mapped to `id`.
    pub fn resolve_host_id(&self, id: HostId) -> Option<EmbeddedNodeRef> {
        self.state.lock().registry.resolve_host_id(id)
    }

    /// The host id mapped to an embedded node, without allocating.
    pub fn resolve_origin_ref(&self, origin: EmbeddedNodeRef) -> Option<HostId> {
        self.state.lock().registry.resolve_origin(origin)
    }

    /// Number of embedded nodes currently mapped to host ids.
    pub fn mapped_node_count(&self) -> usize {
        self.state.lock().registry.len()
    }

    /// Mirror the root node of an embedded view under host id `id`.
    ///
    /// Records `display_bounds` for the view. Returns `None` if the view's
    /// root id cannot be read; the rest of the host tree is unaffected.
    ///
    /// The returned node's `id` is authoritative. A root that was already
    /// mapped, for instance as the source of an event raised before the host
    /// attached the view, keeps its earlier host id and `id` is ignored.
    pub fn get_root_node(
        &self,
        handle: EmbeddedViewHandle,
        id: HostId,
        display_bounds: Rect,
    ) -> Option<MirroredNode> {
        absent(self.try_get_root_node(handle, id, display_bounds), "root node")
    }

    /// Like [`get_root_node`](Self::get_root_node), reporting why no node
    /// was produced.
    pub fn try_get_root_node(
        &self,
        handle: EmbeddedViewHandle,
        id: HostId,
        display_bounds: Rect,
    ) -> EmbedResult<MirroredNode> {
        let view = self.state.lock().view(handle)?;
        let native = view
            .create_accessibility_node()
            .ok_or(EmbedError::NoRootNode)?;
        let origin = self
            .ids
            .source_id(&native)
            .ok_or(EmbedError::CapabilityUnavailable(IdCapability::NodeSource))?;

        let mut state = self.state.lock();
        // The view may have been detached while the lock was released.
        if !state.views.contains_key(handle) {
            return Err(EmbedError::UnknownView);
        }
        state.bounds.set_bounds(handle, display_bounds);
        let id = state
            .registry
            .bind(EmbeddedNodeRef::new(handle, origin), id)?;
        Ok(NodeMirror {
            ids: &self.ids,
            registry: &mut state.registry,
            config: &self.config,
        }
        .convert(&native, id, handle, &display_bounds))
    }

    /// Mirror the embedded node mapped to host id `id`.
    ///
    /// Returns `None` if `id` is unmapped, if the host has not reported the
    /// view's display bounds yet, or if the view has no virtual tree. A
    /// missing-bounds miss is transient: the same request can succeed once
    /// the host positions the view.
    pub fn create_node(&self, id: HostId) -> Option<MirroredNode> {
        absent(self.try_create_node(id), "node")
    }

    /// Like [`create_node`](Self::create_node), reporting why no node was
    /// produced.
    pub fn try_create_node(&self, id: HostId) -> EmbedResult<MirroredNode> {
        let (origin, view) = {
            let state = self.state.lock();
            let origin = state.resolve(id)?;
            if state.bounds.bounds(origin.view).is_none() {
                return Err(EmbedError::MissingDisplayBounds);
            }
            (origin, state.view(origin.view)?)
        };

        let provider = view
            .accessibility_node_provider()
            .ok_or(EmbedError::NoVirtualTree)?;
        let native = provider
            .create_accessibility_node(origin.origin)
            .ok_or(EmbedError::NodeUnavailable(origin.origin))?;

        let mut state = self.state.lock();
        if !state.views.contains_key(origin.view) {
            return Err(EmbedError::UnknownView);
        }
        let display_bounds = state
            .bounds
            .bounds(origin.view)
            .ok_or(EmbedError::MissingDisplayBounds)?;
        Ok(NodeMirror {
            ids: &self.ids,
            registry: &mut state.registry,
            config: &self.config,
        }
        .convert(&native, id, origin.view, &display_bounds))
    }
}

/// Turn a bridging failure into an absent result, logging the reason.
pub(crate) fn absent<T>(result: EmbedResult<T>, what: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(target: targets::MIRROR, %error, "no {what} mirrored");
            None
        }
    }
}

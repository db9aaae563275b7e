//! The bidirectional map between embedded nodes and host ids.

use std::collections::{HashMap, HashSet};

use crate::error::{EmbedError, EmbedResult};
use crate::ids::{EmbeddedNodeRef, EmbeddedViewHandle, HostId};
use crate::logging::targets;

/// Owns both directions of the embedded-node/host-id mapping and the host id
/// allocator.
///
/// The two tables are only ever changed together, so each is always the exact
/// inverse of the other. Host ids are handed out in increasing order and are
/// never reused, even after a view's mappings are dropped.
#[derive(Debug)]
pub struct IdRegistry {
    to_host: HashMap<EmbeddedNodeRef, HostId>,
    to_origin: HashMap<HostId, EmbeddedNodeRef>,
    /// Every id ever bound by the caller. Never shrinks.
    bound: HashSet<HostId>,
    next_id: HostId,
}

impl IdRegistry {
    /// Create an empty registry whose first allocation is `first_id`.
    pub fn new(first_id: HostId) -> Self {
        Self {
            to_host: HashMap::new(),
            to_origin: HashMap::new(),
            bound: HashSet::new(),
            next_id: first_id,
        }
    }

    /// The host id for `origin`, allocating the next free one if unmapped.
    pub fn lookup_or_allocate(&mut self, origin: EmbeddedNodeRef) -> HostId {
        if let Some(&id) = self.to_host.get(&origin) {
            return id;
        }
        // Skip ids the host bound explicitly to view roots, even detached ones.
        let mut id = self.next_id;
        while self.bound.contains(&id) {
            id = id.next();
        }
        self.next_id = id.next();
        self.insert(origin, id);
        tracing::trace!(
            target: targets::REGISTRY,
            view = ?origin.view,
            origin = %origin.origin,
            host = %id,
            "allocated host id"
        );
        id
    }

    /// Map `origin` to a host id chosen by the caller.
    ///
    /// Used for an embedded view's root, whose host id the host tree assigns.
    /// An existing mapping for `origin` is kept and returned instead, so a
    /// node never changes host id. Fails if `id` already names another node.
    pub fn bind(&mut self, origin: EmbeddedNodeRef, id: HostId) -> EmbedResult<HostId> {
        if let Some(&existing) = self.to_host.get(&origin) {
            if existing != id {
                tracing::debug!(
                    target: targets::REGISTRY,
                    origin = %origin.origin,
                    requested = %id,
                    %existing,
                    "embedded node already mapped; keeping existing host id"
                );
            }
            return Ok(existing);
        }
        if self.to_origin.contains_key(&id) {
            return Err(EmbedError::HostIdInUse(id));
        }
        self.bound.insert(id);
        self.insert(origin, id);
        Ok(id)
    }

    /// The embedded node mapped to `id`, if any.
    pub fn resolve_host_id(&self, id: HostId) -> Option<EmbeddedNodeRef> {
        self.to_origin.get(&id).copied()
    }

    /// The host id mapped to `origin`, without allocating.
    pub fn resolve_origin(&self, origin: EmbeddedNodeRef) -> Option<HostId> {
        self.to_host.get(&origin).copied()
    }

    /// Drop every mapping that belongs to `view`. Returns how many were dropped.
    ///
    /// The dropped host ids stay retired.
    pub fn remove_view(&mut self, view: EmbeddedViewHandle) -> usize {
        let before = self.to_host.len();
        self.to_host.retain(|origin, _| origin.view != view);
        self.to_origin.retain(|_, origin| origin.view != view);
        before - self.to_host.len()
    }

    /// The id the next allocation will return.
    pub fn next_id(&self) -> HostId {
        self.next_id
    }

    /// Number of mapped nodes.
    pub fn len(&self) -> usize {
        self.to_host.len()
    }

    /// Whether no node is mapped.
    pub fn is_empty(&self) -> bool {
        self.to_host.is_empty()
    }

    fn insert(&mut self, origin: EmbeddedNodeRef, id: HostId) {
        self.to_host.insert(origin, id);
        self.to_origin.insert(id, origin);
        debug_assert_eq!(self.to_host.len(), self.to_origin.len());
    }
}

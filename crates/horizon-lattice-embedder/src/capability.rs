//! Access to the internal node ids of embedded views.
//!
//! Platforms keep an embedded node's internal id out of the public node API.
//! Whether it can be read at all depends on the platform, so the embedder
//! goes through an [`IdIntrospection`] implementation chosen at startup. Every
//! query may answer `None`; that only removes the affected node, child, parent
//! link or event from the mirrored tree.

use crate::ids::{OriginId, PackedNodeId};
use crate::logging::targets;
use crate::native::{EventRecord, NativeNode, NodeSource};

/// The four id queries an introspection backend can support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdCapability {
    /// Id of a node itself.
    NodeSource,
    /// Id of a node's parent.
    NodeParent,
    /// Id of a node's child, by index.
    NodeChild,
    /// Id of the node an event record is about.
    RecordSource,
}

impl IdCapability {
    /// Every capability, in a fixed order.
    pub const ALL: [IdCapability; 4] = [
        IdCapability::NodeSource,
        IdCapability::NodeParent,
        IdCapability::NodeChild,
        IdCapability::RecordSource,
    ];
}

/// A platform backend that reads internal ids out of embedded nodes.
///
/// Support is fixed for the lifetime of the backend: an unsupported
/// capability must answer `None` on every call.
pub trait IdIntrospection: Send + Sync {
    /// Whether this backend can answer queries for `capability`.
    fn supports(&self, capability: IdCapability) -> bool;

    /// Packed id of `node` itself.
    fn source_node_id(&self, node: &NativeNode) -> Option<PackedNodeId>;

    /// Packed id of `node`'s parent.
    fn parent_node_id(&self, node: &NativeNode) -> Option<PackedNodeId>;

    /// Packed id of `node`'s child at `index`.
    fn child_id(&self, node: &NativeNode, index: usize) -> Option<PackedNodeId>;

    /// Packed id of the node `record` is about.
    fn record_source_node_id(&self, record: &EventRecord) -> Option<PackedNodeId>;
}

/// Reads the packed ids the platform stores on nodes and records.
#[derive(Debug, Clone)]
pub struct PackedIdAccessors {
    source: bool,
    parent: bool,
    child: bool,
    record: bool,
}

impl PackedIdAccessors {
    /// Accessors with every capability available.
    pub fn new() -> Self {
        Self::supporting(&IdCapability::ALL)
    }

    /// Accessors with only the listed capabilities available.
    pub fn supporting(capabilities: &[IdCapability]) -> Self {
        Self {
            source: capabilities.contains(&IdCapability::NodeSource),
            parent: capabilities.contains(&IdCapability::NodeParent),
            child: capabilities.contains(&IdCapability::NodeChild),
            record: capabilities.contains(&IdCapability::RecordSource),
        }
    }
}

impl Default for PackedIdAccessors {
    fn default() -> Self {
        Self::new()
    }
}

impl IdIntrospection for PackedIdAccessors {
    fn supports(&self, capability: IdCapability) -> bool {
        match capability {
            IdCapability::NodeSource => self.source,
            IdCapability::NodeParent => self.parent,
            IdCapability::NodeChild => self.child,
            IdCapability::RecordSource => self.record,
        }
    }

    fn source_node_id(&self, node: &NativeNode) -> Option<PackedNodeId> {
        self.source.then(|| node.packed_source_id()).flatten()
    }

    fn parent_node_id(&self, node: &NativeNode) -> Option<PackedNodeId> {
        self.parent.then(|| node.packed_parent_id()).flatten()
    }

    fn child_id(&self, node: &NativeNode, index: usize) -> Option<PackedNodeId> {
        self.child.then(|| node.packed_child_id(index)).flatten()
    }

    fn record_source_node_id(&self, record: &EventRecord) -> Option<PackedNodeId> {
        match record.source {
            NodeSource::Embedded(id) if self.record => Some(id),
            _ => None,
        }
    }
}

/// A backend for platforms that expose no internal ids at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntrospection;

impl IdIntrospection for NoIntrospection {
    fn supports(&self, _capability: IdCapability) -> bool {
        false
    }

    fn source_node_id(&self, _node: &NativeNode) -> Option<PackedNodeId> {
        None
    }

    fn parent_node_id(&self, _node: &NativeNode) -> Option<PackedNodeId> {
        None
    }

    fn child_id(&self, _node: &NativeNode, _index: usize) -> Option<PackedNodeId> {
        None
    }

    fn record_source_node_id(&self, _record: &EventRecord) -> Option<PackedNodeId> {
        None
    }
}

/// Wraps a backend and unpacks its answers into origin ids.
pub(crate) struct IdShim {
    backend: Box<dyn IdIntrospection>,
}

impl IdShim {
    /// Wrap `backend`, warning once for each capability it lacks.
    pub(crate) fn new(backend: Box<dyn IdIntrospection>) -> Self {
        for capability in IdCapability::ALL {
            if !backend.supports(capability) {
                tracing::warn!(
                    target: targets::CAPABILITY,
                    ?capability,
                    "internal node ids unavailable; affected nodes will not be mirrored"
                );
            }
        }
        Self { backend }
    }

    pub(crate) fn source_id(&self, node: &NativeNode) -> Option<OriginId> {
        self.backend.source_node_id(node).map(unpack)
    }

    pub(crate) fn parent_id(&self, node: &NativeNode) -> Option<OriginId> {
        self.backend.parent_node_id(node).map(unpack)
    }

    pub(crate) fn child_id(&self, node: &NativeNode, index: usize) -> Option<OriginId> {
        self.backend.child_id(node, index).map(unpack)
    }

    pub(crate) fn record_source_id(&self, record: &EventRecord) -> Option<OriginId> {
        self.backend.record_source_node_id(record).map(unpack)
    }
}

fn unpack(packed: PackedNodeId) -> OriginId {
    let origin = packed.virtual_id();
    tracing::trace!(
        target: targets::CAPABILITY,
        packed = packed.as_raw(),
        view_id = packed.view_id(),
        %origin,
        "read internal node id"
    );
    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> NativeNode {
        NativeNode::new()
            .with_source_id(PackedNodeId::new(5, 9))
            .with_parent_id(PackedNodeId::new(1, 9))
            .with_child_id(PackedNodeId::new(6, 9))
    }

    #[test]
    fn test_accessors_unpack_virtual_ids() {
        let shim = IdShim::new(Box::new(PackedIdAccessors::new()));
        let node = node();
        assert_eq!(shim.source_id(&node), Some(OriginId(5)));
        assert_eq!(shim.parent_id(&node), Some(OriginId(1)));
        assert_eq!(shim.child_id(&node, 0), Some(OriginId(6)));
        assert_eq!(shim.child_id(&node, 1), None);

        let record = EventRecord::embedded(PackedNodeId::new(11, 9));
        assert_eq!(shim.record_source_id(&record), Some(OriginId(11)));
    }

    #[test]
    fn test_partial_support() {
        let accessors = PackedIdAccessors::supporting(&[IdCapability::NodeSource]);
        assert!(accessors.supports(IdCapability::NodeSource));
        assert!(!accessors.supports(IdCapability::NodeChild));

        let node = node();
        assert!(accessors.source_node_id(&node).is_some());
        assert!(accessors.parent_node_id(&node).is_none());
        assert!(accessors.child_id(&node, 0).is_none());
    }

    #[test]
    fn test_no_introspection_answers_nothing() {
        let shim = IdShim::new(Box::new(NoIntrospection));
        let node = node();
        assert_eq!(shim.source_id(&node), None);
        assert_eq!(shim.parent_id(&node), None);
        assert_eq!(shim.child_id(&node, 0), None);
        assert_eq!(
            shim.record_source_id(&EventRecord::embedded(PackedNodeId::new(1, 1))),
            None
        );
    }

    #[test]
    fn test_record_from_host_is_not_embedded() {
        let accessors = PackedIdAccessors::new();
        let record = EventRecord {
            source: NodeSource::Host(crate::HostId(3)),
            ..Default::default()
        };
        assert_eq!(accessors.record_source_node_id(&record), None);
    }
}

//! Conversion of embedded nodes into host-space mirrors.

use crate::attributes::{NodeAttributes, copy_supported};
use crate::capability::IdShim;
use crate::config::EmbedderConfig;
use crate::geometry::Rect;
use crate::ids::{EmbeddedNodeRef, EmbeddedViewHandle, HostId};
use crate::logging::targets;
use crate::native::NativeNode;
use crate::registry::IdRegistry;

/// An embedded node as it appears in the host tree.
///
/// Every id is a host id and `bounds_in_screen` is in host screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredNode {
    pub id: HostId,
    /// Owner identity of the host tree.
    pub package_name: String,
    pub class_name: Option<String>,
    pub attributes: NodeAttributes,
    pub bounds_in_parent: Rect,
    pub bounds_in_screen: Rect,
    /// Absent when the parent has not been discovered yet.
    pub parent: Option<HostId>,
    /// In native enumeration order. Children whose ids could not be read are
    /// left out.
    pub children: Vec<HostId>,
}

impl MirroredNode {
    /// Create an empty mirror tagged with `id` and the host's owner identity.
    pub fn new(id: HostId, package_name: impl Into<String>) -> Self {
        Self {
            id,
            package_name: package_name.into(),
            class_name: None,
            attributes: NodeAttributes::default(),
            bounds_in_parent: Rect::ZERO,
            bounds_in_screen: Rect::ZERO,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Converts nodes of one embedded view while the registry is held.
pub(crate) struct NodeMirror<'a> {
    pub(crate) ids: &'a IdShim,
    pub(crate) registry: &'a mut IdRegistry,
    pub(crate) config: &'a EmbedderConfig,
}

impl NodeMirror<'_> {
    /// Build the host-space mirror of `native`, which belongs to `view`.
    ///
    /// Children seen for the first time get fresh host ids. Ids that cannot be
    /// read drop only the affected child or parent link.
    pub(crate) fn convert(
        &mut self,
        native: &NativeNode,
        id: HostId,
        view: EmbeddedViewHandle,
        display_bounds: &Rect,
    ) -> MirroredNode {
        let mut node = MirroredNode::new(id, self.config.package_name.as_str());
        node.class_name = native.class_name.clone();
        copy_supported(
            &native.attributes,
            &mut node.attributes,
            self.config.attribute_tier,
        );

        node.bounds_in_parent = native.bounds_in_parent;
        node.bounds_in_screen = native
            .bounds_in_screen
            .offset_by(display_bounds.top_left());

        node.children = self.children(native, view);
        node.parent = self.parent(native, view);
        node
    }

    fn children(&mut self, native: &NativeNode, view: EmbeddedViewHandle) -> Vec<HostId> {
        let mut children = Vec::with_capacity(native.child_count());
        for index in 0..native.child_count() {
            let Some(origin) = self.ids.child_id(native, index) else {
                tracing::trace!(target: targets::MIRROR, index, "skipping child without readable id");
                continue;
            };
            children.push(
                self.registry
                    .lookup_or_allocate(EmbeddedNodeRef::new(view, origin)),
            );
        }
        children
    }

    fn parent(&self, native: &NativeNode, view: EmbeddedViewHandle) -> Option<HostId> {
        let origin = self.ids.parent_id(native)?;
        self.registry
            .resolve_origin(EmbeddedNodeRef::new(view, origin))
    }
}

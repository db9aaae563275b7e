//! Identifier types for the two id spaces the embedder bridges.
//!
//! - [`HostId`] addresses a node in the host accessibility tree.
//! - [`OriginId`] addresses a node inside one embedded view's own tree.
//! - [`EmbeddedNodeRef`] pairs an origin id with the view it belongs to, since
//!   origin ids from different views overlap freely.

use std::fmt;

use slotmap::new_key_type;

new_key_type! {
    /// A stable handle for an embedded view registered with the embedder.
    ///
    /// Handles are generational: once a view is detached its handle never
    /// aliases a view registered later.
    pub struct EmbeddedViewHandle;
}

/// A virtual node id in the host accessibility tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(pub u64);

impl HostId {
    /// The raw numeric value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one in allocation order.
    #[inline]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host#{}", self.0)
    }
}

/// A virtual node id inside an embedded view's accessibility tree.
///
/// Only meaningful together with the view that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OriginId(pub i32);

impl fmt::Display for OriginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "origin#{}", self.0)
    }
}

/// A node id in the packed form the platform keeps internally.
///
/// The virtual node id occupies the high 32 bits; the low 32 bits hold the
/// id of the view that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedNodeId(u64);

impl PackedNodeId {
    /// Pack a virtual node id with the id of its owning view.
    #[inline]
    pub const fn new(virtual_id: i32, view_id: i32) -> Self {
        Self(((virtual_id as u32 as u64) << 32) | (view_id as u32 as u64))
    }

    /// The raw packed value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// The virtual node id, as used by the owning view's node provider.
    #[inline]
    pub const fn virtual_id(self) -> OriginId {
        OriginId((self.0 >> 32) as u32 as i32)
    }

    /// The id of the owning view.
    #[inline]
    pub const fn view_id(self) -> i32 {
        self.0 as u32 as i32
    }
}

/// A node in a specific embedded view: the natural key on the embedded side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbeddedNodeRef {
    pub view: EmbeddedViewHandle,
    pub origin: OriginId,
}

impl EmbeddedNodeRef {
    /// Create a reference to `origin` within `view`.
    #[inline]
    pub const fn new(view: EmbeddedViewHandle, origin: OriginId) -> Self {
        Self { view, origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_id_unpacks_virtual_id() {
        let packed = PackedNodeId::new(7, 42);
        assert_eq!(packed.virtual_id(), OriginId(7));
        assert_eq!(packed.view_id(), 42);
        assert_eq!(packed.as_raw(), (7u64 << 32) | 42);
    }

    #[test]
    fn test_packed_id_negative_components() {
        let packed = PackedNodeId::new(-1, -5);
        assert_eq!(packed.virtual_id(), OriginId(-1));
        assert_eq!(packed.view_id(), -5);
        assert_eq!(packed.as_raw() >> 32, u32::MAX as u64);
    }

    #[test]
    fn test_host_id_next() {
        assert_eq!(HostId(100).next(), HostId(101));
        assert_eq!(HostId(3).to_string(), "host#3");
    }
}

//! Accessibility embedding for Horizon Lattice.
//!
//! Some views own an accessibility tree of their own: web views, map views,
//! or any component that exposes a virtual node hierarchy through its own id
//! space. This crate presents such a tree as an ordinary subtree of the host
//! accessibility tree, without leaking the embedded view's ids to assistive
//! technology or the host's ids to the embedded view.
//!
//! # Architecture
//!
//! - [`AccessibilityEmbedder`]: the entry point. Mirrors root nodes and
//!   nodes by host id, translates events, forwards actions and hover probes.
//! - [`IdRegistry`]: the bidirectional map between embedded nodes and host
//!   ids, plus the host id allocator.
//! - [`DisplayBoundsRegistry`]: where each embedded view is displayed.
//! - [`IdIntrospection`]: the optional platform capability that reads
//!   internal node ids. When it is unavailable, mirroring degrades instead of
//!   failing.
//! - [`EmbeddedView`] / [`AccessibilityNodeProvider`] / [`HostEventSink`]: the
//!   surfaces the embedder talks to.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use horizon_lattice_embedder::{
//!     AccessibilityEmbedder, EmbedderConfig, HostId, PackedIdAccessors, Rect,
//! };
//!
//! let embedder = AccessibilityEmbedder::new(
//!     EmbedderConfig::new()
//!         .first_virtual_node_id(HostId(100))
//!         .package_name("com.example.app"),
//!     Box::new(PackedIdAccessors::new()),
//!     host_sink,
//! );
//!
//! let view = embedder.register_view(Arc::new(map_view));
//! if let Some(root) = embedder.get_root_node(view, HostId(100), Rect::new(0.0, 80.0, 400.0, 300.0)) {
//!     for child in &root.children {
//!         let node = embedder.create_node(*child);
//!         // attach to the host tree...
//!     }
//! }
//! ```

pub mod attributes;
mod bounds;
pub mod capability;
mod config;
mod delegate;
mod embedder;
mod error;
pub mod geometry;
#[cfg(feature = "accessibility")]
mod host_tree;
mod ids;
pub mod logging;
mod mirror;
pub mod native;
mod registry;
mod view;

pub use attributes::{
    AttributeTier, CollectionInfo, CollectionItemInfo, LiveRegion, NodeAttributes, RangeInfo,
    RangeKind, SelectionMode,
};
pub use bounds::DisplayBoundsRegistry;
pub use capability::{IdCapability, IdIntrospection, NoIntrospection, PackedIdAccessors};
pub use config::{DEFAULT_FIRST_VIRTUAL_NODE_ID, EmbedderConfig};
pub use embedder::AccessibilityEmbedder;
pub use error::{EmbedError, EmbedResult};
pub use geometry::{Point, Rect, Size};
#[cfg(feature = "accessibility")]
pub use host_tree::role_for_class_name;
pub use ids::{EmbeddedNodeRef, EmbeddedViewHandle, HostId, OriginId, PackedNodeId};
pub use mirror::MirroredNode;
pub use native::{
    AccessibilityEvent, ActionArgument, ActionArguments, ActionId, EventRecord, EventType,
    MotionEvent, NativeNode, NodeSource, Pointer, PointerCoords, PointerProperties,
};
pub use registry::IdRegistry;
pub use view::{AccessibilityNodeProvider, EmbeddedView, HostEventSink};

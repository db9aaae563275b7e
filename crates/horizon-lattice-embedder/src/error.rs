//! Error types for the embedder.
//!
//! None of these escape the public bridging operations as panics or hard
//! failures: each operation reports them as an absent node or `false`.

use thiserror::Error;

use crate::capability::IdCapability;
use crate::ids::{HostId, OriginId};

/// Reasons an embedded node, event or action could not be bridged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The platform did not expose the internal id needed for this step.
    #[error("internal node id unavailable: {0:?}")]
    CapabilityUnavailable(IdCapability),

    /// No embedded node is mapped to this host id.
    #[error("no embedded node mapped to {0}")]
    UnknownHostId(HostId),

    /// The host id is already mapped to a different embedded node.
    #[error("{0} is already mapped to another embedded node")]
    HostIdInUse(HostId),

    /// The view handle is stale or was never registered.
    #[error("embedded view is not registered")]
    UnknownView,

    /// The host has not reported where the embedded view is displayed yet.
    #[error("no display bounds recorded for the embedded view")]
    MissingDisplayBounds,

    /// The embedded view does not expose a virtual accessibility tree.
    #[error("embedded view has no virtual accessibility tree")]
    NoVirtualTree,

    /// The embedded view did not produce a node for itself.
    #[error("embedded view returned no root node")]
    NoRootNode,

    /// The embedded view returned no node for this origin id.
    #[error("embedded view returned no node for {0}")]
    NodeUnavailable(OriginId),

    /// An event sub-record could not be mapped into host ids.
    #[error("event record {index} could not be translated")]
    UnmappedRecord {
        /// Position of the record within the event.
        index: usize,
    },
}

/// Result type for embedder operations.
pub type EmbedResult<T> = Result<T, EmbedError>;

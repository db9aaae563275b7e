//! Tracing targets used by the embedder.
//!
//! The embedder logs through the `tracing` crate and never installs a
//! subscriber itself. Filter on these targets to follow one subsystem:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_embedder::events=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Embedder lifecycle: view registration, bounds updates, detaching.
    pub const EMBEDDER: &str = "horizon_lattice_embedder";
    /// Internal-id introspection support.
    pub const CAPABILITY: &str = "horizon_lattice_embedder::capability";
    /// Host id allocation.
    pub const REGISTRY: &str = "horizon_lattice_embedder::registry";
    /// Node mirroring.
    pub const MIRROR: &str = "horizon_lattice_embedder::mirror";
    /// Event translation, actions and hover forwarding.
    pub const EVENTS: &str = "horizon_lattice_embedder::events";
}

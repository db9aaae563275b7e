//! Configuration for an [`AccessibilityEmbedder`](crate::AccessibilityEmbedder).

use crate::attributes::AttributeTier;
use crate::ids::HostId;

/// Host id handed out first when no other value is configured.
///
/// Chosen well above the ids a host tree assigns to its own nodes.
pub const DEFAULT_FIRST_VIRTUAL_NODE_ID: HostId = HostId(65536);

/// Settings shared by every embedded view of one host tree.
#[derive(Clone, Debug)]
pub struct EmbedderConfig {
    /// First host id the allocator hands out. Must not overlap the ids the
    /// host tree uses for its own nodes.
    pub first_virtual_node_id: HostId,
    /// Owner identity stamped on every mirrored node.
    pub package_name: String,
    /// Highest attribute tier the host platform supports.
    pub attribute_tier: AttributeTier,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            first_virtual_node_id: DEFAULT_FIRST_VIRTUAL_NODE_ID,
            package_name: String::new(),
            attribute_tier: AttributeTier::default(),
        }
    }
}

impl EmbedderConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first host id to allocate.
    pub fn first_virtual_node_id(mut self, id: HostId) -> Self {
        self.first_virtual_node_id = id;
        self
    }

    /// Set the owner identity for mirrored nodes.
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Set the highest attribute tier the host platform supports.
    pub fn attribute_tier(mut self, tier: AttributeTier) -> Self {
        self.attribute_tier = tier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EmbedderConfig::new()
            .first_virtual_node_id(HostId(100))
            .package_name("com.example.host")
            .attribute_tier(AttributeTier::Collections);

        assert_eq!(config.first_virtual_node_id, HostId(100));
        assert_eq!(config.package_name, "com.example.host");
        assert_eq!(config.attribute_tier, AttributeTier::Collections);
    }

    #[test]
    fn test_config_defaults() {
        let config = EmbedderConfig::default();
        assert_eq!(config.first_virtual_node_id, DEFAULT_FIRST_VIRTUAL_NODE_ID);
        assert!(config.package_name.is_empty());
        assert_eq!(config.attribute_tier, AttributeTier::HintText);
    }
}

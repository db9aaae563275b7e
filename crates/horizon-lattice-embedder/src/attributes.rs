//! Content attributes carried by accessibility nodes, and the table that
//! copies them from an embedded node onto its mirror.
//!
//! Not every platform exposes every attribute. Each attribute belongs to an
//! [`AttributeTier`]; the copy step only transfers attributes whose tier the
//! host platform supports and leaves the rest at their defaults.

/// Platform support tiers for node attributes, in ascending order.
///
/// A platform that supports a tier supports every tier below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AttributeTier {
    /// States and text every platform exposes.
    Core,
    /// Editable text fields.
    Editable,
    /// Collection, range and live-region information.
    Collections,
    /// Error text and text length limits.
    ErrorReporting,
    /// Context-click support.
    ContextClick,
    /// Drawing order and importance.
    DrawingOrder,
    /// Hint text and extra-data keys.
    #[default]
    HintText,
}

/// How a collection lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    #[default]
    None,
    Single,
    Multiple,
}

/// Shape of a list, grid or table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollectionInfo {
    pub row_count: usize,
    pub column_count: usize,
    pub hierarchical: bool,
    pub selection_mode: SelectionMode,
}

/// Position of an item within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollectionItemInfo {
    pub row_index: usize,
    pub row_span: usize,
    pub column_index: usize,
    pub column_span: usize,
    pub heading: bool,
    pub selected: bool,
}

/// Kind of value a range node reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeKind {
    #[default]
    Integer,
    Float,
    Percent,
}

/// Value and bounds of a slider, progress indicator or similar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeInfo {
    pub kind: RangeKind,
    pub min: f32,
    pub max: f32,
    pub current: f32,
}

/// Politeness of a live region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LiveRegion {
    #[default]
    None,
    Polite,
    Assertive,
}

/// The semantic content of one accessibility node.
///
/// Identity, geometry and tree links live on the node types themselves; this
/// struct is what gets copied verbatim across the embedding boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeAttributes {
    pub accessibility_focused: bool,
    pub checkable: bool,
    pub checked: bool,
    pub content_description: Option<String>,
    pub enabled: bool,
    pub clickable: bool,
    pub focusable: bool,
    pub focused: bool,
    pub long_clickable: bool,
    pub movement_granularities: u32,
    pub password: bool,
    pub scrollable: bool,
    pub selected: bool,
    pub text: Option<String>,
    pub visible_to_user: bool,

    pub editable: bool,

    pub can_open_popup: bool,
    pub collection_info: Option<CollectionInfo>,
    pub collection_item_info: Option<CollectionItemInfo>,
    pub content_invalid: bool,
    pub dismissable: bool,
    pub input_type: u32,
    pub live_region: LiveRegion,
    pub multi_line: bool,
    pub range_info: Option<RangeInfo>,

    pub error: Option<String>,
    pub max_text_length: Option<usize>,

    pub context_clickable: bool,

    pub drawing_order: i32,
    pub important_for_accessibility: bool,

    pub available_extra_data: Vec<String>,
    pub hint_text: Option<String>,
    pub showing_hint_text: bool,
}

type CopyFn = fn(&NodeAttributes, &mut NodeAttributes);

/// One row of the copy table.
struct AttributeCopy {
    name: &'static str,
    tier: AttributeTier,
    copy: CopyFn,
}

macro_rules! copy_rows {
    ($($tier:ident => [$($field:ident),* $(,)?]),* $(,)?) => {
        &[$($(AttributeCopy {
            name: stringify!($field),
            tier: AttributeTier::$tier,
            copy: |src, dst| dst.$field = src.$field.clone(),
        },)*)*]
    };
}

static ATTRIBUTE_COPIES: &[AttributeCopy] = copy_rows! {
    Core => [
        accessibility_focused, checkable, checked, content_description, enabled,
        clickable, focusable, focused, long_clickable, movement_granularities,
        password, scrollable, selected, text, visible_to_user,
    ],
    Editable => [editable],
    Collections => [
        can_open_popup, collection_info, collection_item_info, content_invalid,
        dismissable, input_type, live_region, multi_line, range_info,
    ],
    ErrorReporting => [error, max_text_length],
    ContextClick => [context_clickable],
    DrawingOrder => [drawing_order, important_for_accessibility],
    HintText => [available_extra_data, hint_text, showing_hint_text],
};

/// Copy every attribute the platform tier supports from `src` to `dst`.
///
/// Attributes above `supported` are left untouched on `dst`.
pub fn copy_supported(src: &NodeAttributes, dst: &mut NodeAttributes, supported: AttributeTier) {
    for row in ATTRIBUTE_COPIES.iter().filter(|row| row.tier <= supported) {
        (row.copy)(src, dst);
    }
}

/// Names of the attributes copied at the given tier, in table order.
pub fn supported_attribute_names(supported: AttributeTier) -> impl Iterator<Item = &'static str> {
    ATTRIBUTE_COPIES
        .iter()
        .filter(move |row| row.tier <= supported)
        .map(|row| row.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> NodeAttributes {
        NodeAttributes {
            checkable: true,
            checked: true,
            text: Some("Wi-Fi".into()),
            enabled: true,
            editable: true,
            collection_info: Some(CollectionInfo {
                row_count: 3,
                column_count: 1,
                ..Default::default()
            }),
            range_info: Some(RangeInfo {
                kind: RangeKind::Percent,
                min: 0.0,
                max: 100.0,
                current: 40.0,
            }),
            error: Some("required".into()),
            context_clickable: true,
            drawing_order: 4,
            hint_text: Some("SSID".into()),
            available_extra_data: vec!["text_location".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_full_tier_copies_everything() {
        let src = populated();
        let mut dst = NodeAttributes::default();
        copy_supported(&src, &mut dst, AttributeTier::HintText);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_core_tier_omits_newer_attributes() {
        let src = populated();
        let mut dst = NodeAttributes::default();
        copy_supported(&src, &mut dst, AttributeTier::Core);

        assert!(dst.checkable);
        assert!(dst.checked);
        assert_eq!(dst.text.as_deref(), Some("Wi-Fi"));
        assert!(!dst.editable);
        assert!(dst.collection_info.is_none());
        assert!(dst.error.is_none());
        assert!(dst.hint_text.is_none());
    }

    #[test]
    fn test_intermediate_tier() {
        let src = populated();
        let mut dst = NodeAttributes::default();
        copy_supported(&src, &mut dst, AttributeTier::ErrorReporting);

        assert!(dst.editable);
        assert_eq!(dst.range_info, src.range_info);
        assert_eq!(dst.error.as_deref(), Some("required"));
        assert!(!dst.context_clickable);
        assert_eq!(dst.drawing_order, 0);
    }

    #[test]
    fn test_attribute_names_follow_tiers() {
        let core: Vec<_> = supported_attribute_names(AttributeTier::Core).collect();
        assert_eq!(core.len(), 15);
        assert!(core.contains(&"visible_to_user"));
        assert!(!core.contains(&"editable"));

        let all = supported_attribute_names(AttributeTier::HintText).count();
        assert_eq!(all, 33);
    }
}

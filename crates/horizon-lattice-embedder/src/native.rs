//! Data produced by embedded views: accessibility nodes, events and pointer
//! events, in the embedded view's own id and coordinate space.

use std::collections::BTreeMap;

use crate::attributes::NodeAttributes;
use crate::geometry::{Point, Rect};
use crate::ids::{HostId, PackedNodeId};

/// An accessibility node as reported by an embedded view.
///
/// The packed ids are the platform's internal bookkeeping. Code outside an
/// [`IdIntrospection`](crate::IdIntrospection) implementation should not
/// read them directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeNode {
    pub class_name: Option<String>,
    pub attributes: NodeAttributes,
    /// Bounds relative to the parent node.
    pub bounds_in_parent: Rect,
    /// Bounds in the embedded view's screen space.
    pub bounds_in_screen: Rect,
    source_id: Option<PackedNodeId>,
    parent_id: Option<PackedNodeId>,
    child_ids: Vec<PackedNodeId>,
}

impl NativeNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node's class name.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the node's content attributes.
    pub fn with_attributes(mut self, attributes: NodeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set both bounds rectangles.
    pub fn with_bounds(mut self, in_parent: Rect, in_screen: Rect) -> Self {
        self.bounds_in_parent = in_parent;
        self.bounds_in_screen = in_screen;
        self
    }

    /// Record the platform's packed id for this node.
    pub fn with_source_id(mut self, id: PackedNodeId) -> Self {
        self.source_id = Some(id);
        self
    }

    /// Record the platform's packed id for this node's parent.
    pub fn with_parent_id(mut self, id: PackedNodeId) -> Self {
        self.parent_id = Some(id);
        self
    }

    /// Append a child, by the platform's packed id.
    pub fn with_child_id(mut self, id: PackedNodeId) -> Self {
        self.child_ids.push(id);
        self
    }

    /// Number of children, in native enumeration order.
    pub fn child_count(&self) -> usize {
        self.child_ids.len()
    }

    /// Raw packed id of this node.
    pub fn packed_source_id(&self) -> Option<PackedNodeId> {
        self.source_id
    }

    /// Raw packed id of this node's parent.
    pub fn packed_parent_id(&self) -> Option<PackedNodeId> {
        self.parent_id
    }

    /// Raw packed id of the child at `index`.
    pub fn packed_child_id(&self, index: usize) -> Option<PackedNodeId> {
        self.child_ids.get(index).copied()
    }
}

/// Which node an event or record is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeSource {
    /// No source node.
    #[default]
    Unset,
    /// A node in an embedded view, by the platform's packed id.
    Embedded(PackedNodeId),
    /// A node in the host tree.
    Host(HostId),
}

/// One record of an accessibility event.
///
/// An event carries its own record plus any number of additional ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecord {
    pub source: NodeSource,
    pub class_name: Option<String>,
    pub text: Vec<String>,
    pub content_description: Option<String>,
    pub before_text: Option<String>,
    pub checked: bool,
    pub enabled: bool,
    pub password: bool,
    pub item_count: Option<usize>,
    pub current_item_index: Option<usize>,
    pub from_index: Option<usize>,
    pub to_index: Option<usize>,
    pub scroll_x: i32,
    pub scroll_y: i32,
    pub added_count: Option<usize>,
    pub removed_count: Option<usize>,
}

impl EventRecord {
    /// Create a record about an embedded node.
    pub fn embedded(source: PackedNodeId) -> Self {
        Self {
            source: NodeSource::Embedded(source),
            ..Default::default()
        }
    }

    /// The host id this record points at, once translated.
    pub fn host_source(&self) -> Option<HostId> {
        match self.source {
            NodeSource::Host(id) => Some(id),
            _ => None,
        }
    }
}

/// Kinds of accessibility events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    ViewClicked,
    ViewLongClicked,
    ViewSelected,
    ViewFocused,
    ViewTextChanged,
    ViewScrolled,
    ViewHoverEnter,
    ViewHoverExit,
    ViewAccessibilityFocused,
    ViewAccessibilityFocusCleared,
    WindowStateChanged,
    WindowContentChanged,
    Announcement,
    /// Any event type without a dedicated variant.
    Other(u32),
}

/// An accessibility event raised by an embedded view.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibilityEvent {
    pub event_type: EventType,
    pub package_name: Option<String>,
    pub event_time: u64,
    pub content_change_types: u32,
    pub movement_granularity: u32,
    pub action: u32,
    /// The event's own record: its source node and payload.
    pub record: EventRecord,
    /// Additional records appended to the event.
    pub records: Vec<EventRecord>,
}

impl AccessibilityEvent {
    /// Create an event of `event_type` about an embedded node.
    pub fn new(event_type: EventType, source: PackedNodeId) -> Self {
        Self {
            event_type,
            package_name: None,
            event_time: 0,
            content_change_types: 0,
            movement_granularity: 0,
            action: 0,
            record: EventRecord::embedded(source),
            records: Vec::new(),
        }
    }

    /// Append an additional record.
    pub fn with_record(mut self, record: EventRecord) -> Self {
        self.records.push(record);
        self
    }
}

/// Identifier of an accessibility action, as understood by the embedded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u32);

impl ActionId {
    pub const FOCUS: Self = Self(0x0000_0001);
    pub const CLEAR_FOCUS: Self = Self(0x0000_0002);
    pub const SELECT: Self = Self(0x0000_0004);
    pub const CLICK: Self = Self(0x0000_0010);
    pub const LONG_CLICK: Self = Self(0x0000_0020);
    pub const ACCESSIBILITY_FOCUS: Self = Self(0x0000_0040);
    pub const CLEAR_ACCESSIBILITY_FOCUS: Self = Self(0x0000_0080);
    pub const SCROLL_FORWARD: Self = Self(0x0000_1000);
    pub const SCROLL_BACKWARD: Self = Self(0x0000_2000);
    pub const SET_TEXT: Self = Self(0x0020_0000);
}

/// A single action argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionArgument {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Named arguments that accompany an action.
pub type ActionArguments = BTreeMap<String, ActionArgument>;

/// Per-pointer identity data of a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerProperties {
    pub id: i32,
    pub tool_type: i32,
}

/// Per-pointer sample data of a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerCoords {
    pub position: Point,
    pub pressure: f32,
    pub size: f32,
    pub touch_major: f32,
    pub touch_minor: f32,
    pub tool_major: f32,
    pub tool_minor: f32,
    pub orientation: f32,
}

/// One pointer of a motion event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub properties: PointerProperties,
    pub coords: PointerCoords,
}

/// A pointer event, as used for hover exploration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionEvent {
    pub down_time: u64,
    pub event_time: u64,
    pub action: i32,
    pub pointers: Vec<Pointer>,
    pub meta_state: i32,
    pub button_state: i32,
    pub x_precision: f32,
    pub y_precision: f32,
    pub device_id: i32,
    pub edge_flags: i32,
    pub source: i32,
    pub flags: i32,
}

impl MotionEvent {
    pub const ACTION_HOVER_MOVE: i32 = 7;
    pub const ACTION_HOVER_ENTER: i32 = 9;
    pub const ACTION_HOVER_EXIT: i32 = 10;

    /// Number of pointers in the event.
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Return a copy with every pointer position mapped through `map`.
    ///
    /// All other pointer and event data is carried over unchanged.
    pub fn map_positions(&self, map: impl Fn(Point) -> Point) -> Self {
        let mut mapped = self.clone();
        for pointer in &mut mapped.pointers {
            pointer.coords.position = map(pointer.coords.position);
        }
        mapped
    }
}

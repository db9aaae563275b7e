//! Conversion of mirrored nodes into AccessKit nodes for the host tree.

use accesskit::{Action, Node, NodeId, Role, Toggled};

use crate::geometry::Rect;
use crate::ids::HostId;
use crate::mirror::MirroredNode;

impl From<HostId> for NodeId {
    fn from(id: HostId) -> Self {
        NodeId(id.0)
    }
}

impl From<NodeId> for HostId {
    fn from(id: NodeId) -> Self {
        HostId(id.0)
    }
}

/// Guess an AccessKit role from a native class name.
///
/// Only the last path segment is considered, so `"android.widget.Button"`
/// and `"Button"` both map to [`Role::Button`].
pub fn role_for_class_name(class_name: Option<&str>) -> Role {
    let Some(class_name) = class_name else {
        return Role::Unknown;
    };
    let simple = class_name.rsplit(['.', '$']).next().unwrap_or(class_name);
    match simple {
        "Button" | "ImageButton" => Role::Button,
        "CheckBox" | "CheckedTextView" => Role::CheckBox,
        "Switch" | "SwitchCompat" | "ToggleButton" => Role::Switch,
        "RadioButton" => Role::RadioButton,
        "EditText" | "AutoCompleteTextView" => Role::TextInput,
        "TextView" => Role::Label,
        "ImageView" => Role::Image,
        "ProgressBar" => Role::ProgressIndicator,
        "SeekBar" | "RatingBar" => Role::Slider,
        "Spinner" => Role::ComboBox,
        "ListView" | "RecyclerView" => Role::List,
        "GridView" => Role::Grid,
        "ScrollView" | "HorizontalScrollView" => Role::ScrollView,
        "TabWidget" => Role::TabList,
        "WebView" => Role::Document,
        "View" | "ViewGroup" | "FrameLayout" | "LinearLayout" | "RelativeLayout" => {
            Role::GenericContainer
        }
        _ => Role::Unknown,
    }
}

fn to_accesskit_rect(rect: &Rect) -> accesskit::Rect {
    accesskit::Rect {
        x0: rect.left() as f64,
        y0: rect.top() as f64,
        x1: rect.right() as f64,
        y1: rect.bottom() as f64,
    }
}

impl MirroredNode {
    /// Build the AccessKit node for this mirror.
    ///
    /// Bounds are the host-screen bounds, for host trees that place embedded
    /// nodes without per-node transforms.
    pub fn to_accesskit(&self) -> Node {
        let attrs = &self.attributes;
        let mut role = role_for_class_name(self.class_name.as_deref());
        if role == Role::TextInput && attrs.multi_line {
            role = Role::MultilineTextInput;
        }
        let mut node = Node::new(role);

        node.set_bounds(to_accesskit_rect(&self.bounds_in_screen));

        if let Some(label) = attrs.content_description.as_ref().or(attrs.text.as_ref()) {
            node.set_label(label.clone());
        }
        if attrs.editable
            && let Some(text) = &attrs.text
        {
            node.set_value(text.clone());
        }
        if let Some(hint) = &attrs.hint_text {
            node.set_placeholder(hint.clone());
        }
        if let Some(error) = &attrs.error {
            node.set_description(error.clone());
        }

        if attrs.checkable {
            node.set_toggled(if attrs.checked {
                Toggled::True
            } else {
                Toggled::False
            });
        }
        if attrs.selected {
            node.set_selected(true);
        }
        if !attrs.enabled {
            node.set_disabled();
        }
        if !attrs.visible_to_user {
            node.set_hidden();
        }
        if attrs.content_invalid {
            node.set_invalid(accesskit::Invalid::True);
        }

        if let Some(range) = &attrs.range_info {
            node.set_numeric_value(range.current as f64);
            node.set_min_numeric_value(range.min as f64);
            node.set_max_numeric_value(range.max as f64);
        }
        if let Some(collection) = &attrs.collection_info {
            node.set_row_count(collection.row_count);
            node.set_column_count(collection.column_count);
        }
        if let Some(item) = &attrs.collection_item_info {
            node.set_row_index(item.row_index);
            node.set_column_index(item.column_index);
        }

        if attrs.clickable {
            node.add_action(Action::Click);
        }
        if attrs.focusable {
            node.add_action(Action::Focus);
        }

        if !self.children.is_empty() {
            let children: Vec<NodeId> = self.children.iter().copied().map(NodeId::from).collect();
            node.set_children(children);
        }
        node
    }

    /// The `(id, node)` pair to place in an AccessKit tree update.
    pub fn to_accesskit_entry(&self) -> (NodeId, Node) {
        (self.id.into(), self.to_accesskit())
    }
}

// The "Open Shifts" sentinel resource.
//
// Unassigned shifts are booked against this resource. It belongs to the placeholder
// group "N/A" and never to a real team; the team an open shift is offered to travels
// with the shift itself.

pub const OPEN_SHIFT_RESOURCE_ID: &str = "open-shift-resource-id";
pub const OPEN_SHIFT_RESOURCE_NAME: &str = "Open Shifts";
pub const OPEN_SHIFT_GROUP_ID: &str = "N/A";
pub const OPEN_SHIFT_COLOR: &str = "#9e9e9e";

pub fn is_open_shift_resource(resource_id: &str) -> bool {
    resource_id == OPEN_SHIFT_RESOURCE_ID
}

pub fn open_shift_title(group_name: &str, title: &str) -> String {
    format!("Open Shift for {group_name}: {title}")
}

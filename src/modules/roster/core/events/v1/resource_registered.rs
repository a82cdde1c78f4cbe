// Event payload: ResourceRegisteredV1.
//
// `group_id` is a weak reference. The "Open Shifts" resource points at the
// placeholder group "N/A", which never exists as a group.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ResourceRegisteredV1 {
    pub resource_id: String,
    pub name: String,
    pub color: String,
    pub group_id: String,
}

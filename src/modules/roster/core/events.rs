pub mod v1 {
    pub mod group_expansion_toggled;
    pub mod group_registered;
    pub mod resource_registered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RosterEvent {
    GroupRegisteredV1(v1::group_registered::GroupRegisteredV1),
    GroupExpansionToggledV1(v1::group_expansion_toggled::GroupExpansionToggledV1),
    ResourceRegisteredV1(v1::resource_registered::ResourceRegisteredV1),
}

pub fn group_stream_id(group_id: &str) -> String {
    format!("Group-{group_id}")
}

pub fn resource_stream_id(resource_id: &str) -> String {
    format!("Resource-{resource_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterGroup {
    pub group_id: String,
    pub name: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterResource {
    pub resource_id: String,
    pub name: String,
    pub color: String,
    pub group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleGroupExpansion {
    pub group_id: String,
}

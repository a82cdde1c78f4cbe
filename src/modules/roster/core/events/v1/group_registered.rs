#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct GroupRegisteredV1 {
    pub group_id: String,
    pub name: String,
    pub expanded: bool,
}

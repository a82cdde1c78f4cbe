/// Carries the resulting flag rather than the flip.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct GroupExpansionToggledV1 {
    pub group_id: String,
    pub expanded: bool,
}

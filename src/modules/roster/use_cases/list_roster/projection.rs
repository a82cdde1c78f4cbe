#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupRow {
    pub group_id: String,
    pub name: String,
    pub expanded: bool,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupView {
    pub group_id: String,
    pub name: String,
    pub expanded: bool,
}

impl From<GroupRow> for GroupView {
    fn from(row: GroupRow) -> Self {
        Self {
            group_id: row.group_id,
            name: row.name,
            expanded: row.expanded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResourceRow {
    pub resource_id: String,
    pub name: String,
    pub color: String,
    pub group_id: String,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResourceView {
    pub resource_id: String,
    pub name: String,
    pub color: String,
    pub group_id: String,
}

impl From<ResourceRow> for ResourceView {
    fn from(row: ResourceRow) -> Self {
        Self {
            resource_id: row.resource_id,
            name: row.name,
            color: row.color,
            group_id: row.group_id,
        }
    }
}

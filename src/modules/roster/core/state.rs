#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupState {
    None,
    Registered {
        group_id: String,
        name: String,
        expanded: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    None,
    Registered {
        resource_id: String,
        name: String,
        color: String,
        group_id: String,
    },
}

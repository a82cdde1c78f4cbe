// Roster projector. Watermarks are kept per stream as the last applied version.

use crate::modules::roster::adapters::outbound::projections::RosterProjectionRepository;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::projections::{Mutation, apply};
use crate::shared::infrastructure::watermark::WatermarkRepository;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct RosterProjector<TRepository, TWatermarkRepository>
where
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> RosterProjector<TRepository, TWatermarkRepository>
where
    TRepository: RosterProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}/{stream_id}", self.name)
    }

    pub async fn applied_version(&self, stream_id: &str) -> anyhow::Result<i64> {
        let key = self.watermark_key(stream_id);
        match self.watermark_repository.get(&key).await? {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("watermark {key} holds {raw:?}")),
            None => Ok(0),
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &RosterEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::UpsertGroup(row) => self.repository.upsert_group(row).await?,
                Mutation::SetGroupExpanded {
                    group_id,
                    expanded,
                    last_event_id,
                } => {
                    self.repository
                        .set_group_expanded(&group_id, expanded, &last_event_id)
                        .await?
                }
                Mutation::UpsertResource(row) => self.repository.upsert_resource(row).await?,
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await?;
        Ok(())
    }

    /// Replays whatever part of `events` the read model has not seen yet.
    pub async fn catch_up(&self, stream_id: &str, events: &[RosterEvent]) -> anyhow::Result<usize> {
        let applied = self.applied_version(stream_id).await?;
        let mut replayed = 0;
        for (index, event) in events.iter().enumerate() {
            let version = index as i64 + 1;
            if version > applied {
                self.apply_one(stream_id, version, event).await?;
                replayed += 1;
            }
        }
        if replayed > 0 {
            tracing::warn!(stream_id, replayed, "roster read model caught up");
        }
        Ok(replayed)
    }
}

#[cfg(test)]
mod roster_projector_tests {
    use super::*;
    use crate::modules::roster::adapters::outbound::projections_in_memory::InMemoryRosterProjections;
    use crate::modules::roster::core::events::v1::group_expansion_toggled::GroupExpansionToggledV1;
    use crate::modules::roster::core::events::v1::group_registered::GroupRegisteredV1;
    use crate::modules::roster::use_cases::list_roster::queries_port::RosterQueries;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> Arc<InMemoryRosterProjections> {
        Arc::new(InMemoryRosterProjections::new())
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_project_registration_then_toggle(before_each: Arc<InMemoryRosterProjections>) {
        let st = before_each;
        let projector = RosterProjector::new("roster", st.clone(), st.clone());
        projector
            .apply_one(
                "Group-group-sales",
                1,
                &RosterEvent::GroupRegisteredV1(GroupRegisteredV1 {
                    group_id: "group-sales".into(),
                    name: "Sales Department".into(),
                    expanded: true,
                }),
            )
            .await
            .unwrap();
        projector
            .apply_one(
                "Group-group-sales",
                2,
                &RosterEvent::GroupExpansionToggledV1(GroupExpansionToggledV1 {
                    group_id: "group-sales".into(),
                    expanded: false,
                }),
            )
            .await
            .unwrap();
        let groups = st.list_groups().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].expanded);
        assert_eq!(
            st.get("roster/Group-group-sales").await.unwrap(),
            Some(String::from("2"))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let store = InMemoryRosterProjections::new();
        store.toggle_offline();
        let st = Arc::new(store);
        let projector = RosterProjector::new("roster", st.clone(), st);
        let result = projector
            .apply_one(
                "Group-group-sales",
                1,
                &RosterEvent::GroupRegisteredV1(GroupRegisteredV1 {
                    group_id: "group-sales".into(),
                    name: "Sales Department".into(),
                    expanded: true,
                }),
            )
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Projections repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replay_only_the_unseen_tail_of_a_stream(
        before_each: Arc<InMemoryRosterProjections>,
    ) {
        let st = before_each;
        let projector = RosterProjector::new("roster", st.clone(), st.clone());
        let registered = RosterEvent::GroupRegisteredV1(GroupRegisteredV1 {
            group_id: "group-ops".into(),
            name: "Operations".into(),
            expanded: true,
        });
        let collapsed = RosterEvent::GroupExpansionToggledV1(GroupExpansionToggledV1 {
            group_id: "group-ops".into(),
            expanded: false,
        });
        projector
            .apply_one("Group-group-ops", 1, &registered)
            .await
            .unwrap();

        let replayed = projector
            .catch_up("Group-group-ops", &[registered, collapsed])
            .await
            .unwrap();

        assert_eq!(replayed, 1);
        assert!(!st.get_group("group-ops").await.unwrap().unwrap().expanded);
        assert_eq!(projector.applied_version("Group-group-ops").await.unwrap(), 2);
    }
}

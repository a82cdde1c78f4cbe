use crate::modules::shifts::core::events::ShiftEvent;
use crate::modules::shifts::use_cases::list_shifts::projection::ShiftRow;

pub enum Mutation {
    Upsert(ShiftRow),
    Remove { shift_id: String },
}

pub fn apply(stream_id: &str, version: i64, event: &ShiftEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        ShiftEvent::ShiftScheduledV1(details) => vec![Mutation::Upsert(ShiftRow {
            shift_id: details.shift_id.clone(),
            resource_id: details.resource_id.clone(),
            title: details.title.clone(),
            start: details.start,
            end: details.end,
            color: details.color.clone(),
            open_shift_group_id: details.open_shift_group_id.clone(),
            created_at: details.created_at,
            last_event_id: Some(stream_key),
        })],
        ShiftEvent::ShiftCancelledV1(details) => vec![Mutation::Remove {
            shift_id: details.shift_id.clone(),
        }],
    }
}

#[cfg(test)]
mod shift_projection_apply_tests {
    use super::*;
    use crate::modules::shifts::core::events::v1::shift_cancelled::ShiftCancelledV1;
    use crate::tests::fixtures::events::shift_scheduled_v1::make_shift_scheduled_v1_event;
    use rstest::rstest;

    #[rstest]
    fn it_should_upsert_a_row_for_a_scheduled_shift() {
        let event = make_shift_scheduled_v1_event();
        let mutations = apply("Shift-shift-fixed-0001", 1, &ShiftEvent::ShiftScheduledV1(event));
        assert_eq!(mutations.len(), 1);
        match &mutations[0] {
            Mutation::Upsert(row) => {
                assert_eq!(row.shift_id, "shift-fixed-0001");
                assert_eq!(row.last_event_id.as_deref(), Some("Shift-shift-fixed-0001:1"));
            }
            Mutation::Remove { .. } => panic!("expected Upsert"),
        }
    }

    #[rstest]
    fn it_should_remove_the_row_of_a_cancelled_shift() {
        let event = ShiftEvent::ShiftCancelledV1(ShiftCancelledV1 {
            shift_id: "shift-fixed-0001".into(),
            cancelled_at: 1_748_300_000_000,
        });
        let mutations = apply("Shift-shift-fixed-0001", 2, &event);
        assert!(matches!(
            &mutations[0],
            Mutation::Remove { shift_id } if shift_id == "shift-fixed-0001"
        ));
    }
}

pub mod commands {
    pub mod schedule_shift;
}
pub mod events {
    pub mod shift_scheduled_v1;
}
pub mod roster;
pub mod state;

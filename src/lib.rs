pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod watermark;
    }
}

pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod bucket;
            pub mod errors;
            pub mod layout;
            pub mod navigation;
            pub mod resolver;
            pub mod view_mode;
        }
        pub mod use_cases {
            pub mod render_calendar {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }

    pub mod shifts {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod schedule_shift {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_shift {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_shifts {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod roster {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod open_shifts;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod register_roster {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod toggle_group {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_roster {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;

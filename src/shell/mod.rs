// Composition root for the shift calendar.
//
// Responsibilities
// - Read settings from file and environment.
// - Instantiate the in-memory stores and wire them into the use case handlers.
// - Seed the default roster.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;

//! Typed endpoint wrappers
//!
//! One module per backend router. Wrappers borrow the core
//! [`ApiClient`](crate::ApiClient) and are reached through accessor
//! methods, e.g. `client.projects().list(Page::default(), token)`. Every
//! method takes the bearer token as an explicit `Option<&str>`, matching
//! the core client's per-call credential model.

pub mod checklists;
pub mod locations;
pub mod monitoring_groups;
pub mod projects;
pub mod sensor_data;
pub mod sensor_fields;
pub mod sensors;
pub mod sources;
pub mod teams;
pub mod users;

pub use checklists::ChecklistsApi;
pub use locations::LocationsApi;
pub use monitoring_groups::MonitoringGroupsApi;
pub use projects::ProjectsApi;
pub use sensor_data::SensorDataApi;
pub use sensor_fields::SensorFieldsApi;
pub use sensors::SensorsApi;
pub use sources::SourcesApi;
pub use teams::TeamsApi;
pub use users::UsersApi;

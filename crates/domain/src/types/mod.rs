//! Resource records and request payloads
//!
//! One module per backend router. All records are identified by a string
//! `id` (the backend emits UUIDs, but nothing here depends on that) except
//! [`Source`], whose id is an integer on the wire. Timestamps stay ISO-8601
//! strings exactly as the backend serializes them.

pub mod checklist;
pub mod location;
pub mod monitoring_group;
pub mod project;
pub mod sensor;
pub mod sensor_data;
pub mod sensor_field;
pub mod source;
pub mod team;
pub mod user;

pub use checklist::{
    Checklist, ChecklistCategory, ChecklistExpanded, ChecklistItem, ChecklistPayload,
    ChecklistResponse, ChecklistResponsePayload, ChecklistResponseType, ChecklistTemplate,
};
pub use location::{Location, LocationPayload};
pub use monitoring_group::{MonitoringGroup, MonitoringGroupPayload};
pub use project::{Project, ProjectPayload};
pub use sensor::{MonitoringSensor, MonitoringSensorPayload, SensorDetails};
pub use sensor_data::{
    BulkIngestAck, BulkSensorDataItem, BulkSensorDataRequest, FieldValue, SensorDataCreate,
    SensorDataPoint, SensorDataUpdate, SensorReading,
};
pub use sensor_field::{SensorField, SensorFieldCreate, SensorFieldUpdate};
pub use source::{Source, SourceCreate, SourceUpdate};
pub use team::{Team, TeamPayload};
pub use user::{MeResponse, TokenPair, UserAccount, UserRegistration};

//! Integration tests for wire-shape records
//!
//! Decodes fixtures shaped like real backend responses and checks the
//! serialization contract of request payloads: unknown wire fields are
//! ignored, missing required fields fail, and payloads only ever emit the
//! fields the caller set.

use fieldscope_domain::types::checklist::{ChecklistExpanded, ChecklistResponseType};
use fieldscope_domain::types::location::LocationPayload;
use fieldscope_domain::types::monitoring_group::{MonitoringGroup, MonitoringGroupPayload};
use fieldscope_domain::types::project::{Project, ProjectPayload};
use fieldscope_domain::types::sensor::MonitoringSensor;
use fieldscope_domain::types::sensor_data::{
    BulkSensorDataItem, BulkSensorDataRequest, FieldValue, SensorReading,
};
use fieldscope_domain::types::source::Source;
use fieldscope_domain::types::user::MeResponse;

// ============================================================================
// Record decoding
// ============================================================================

#[test]
fn decodes_project_with_nullable_fields() {
    let json = r#"{
        "id": "6f1c2a34-0000-0000-0000-000000000001",
        "project_number": null,
        "project_name": "Tailings Dam North",
        "description": "Seepage and settlement monitoring",
        "start_date": "2024-03-01",
        "end_date": null,
        "status": "active",
        "active": 1,
        "created_at": "2024-03-01T09:15:00",
        "last_updated": "2024-06-11T16:40:12",
        "locations_count": 4
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.project_name, "Tailings Dam North");
    assert_eq!(project.project_number, None);
    assert_eq!(project.end_date, None);
    assert_eq!(project.locations_count, 4);
}

#[test]
fn unknown_wire_fields_are_ignored() {
    // The backend is free to grow fields; old clients must keep decoding.
    let json = r#"{
        "id": "1",
        "email": "a@b.com",
        "first_name": "A",
        "last_name": "B",
        "roles": ["admin"],
        "org": {"id": "x"}
    }"#;

    let me: MeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(me.id, "1");
    assert_eq!(me.email, "a@b.com");
}

#[test]
fn missing_required_field_fails_to_decode() {
    // No `group_name`
    let json = r#"{
        "id": "g1",
        "mon_loc_id": "l1",
        "group_type": "weather",
        "active": 1,
        "created_at": "2024-01-01T00:00:00",
        "last_updated": "2024-01-01T00:00:00"
    }"#;

    let result: Result<MonitoringGroup, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn decodes_sensor_with_optional_details() {
    let bare = r#"{
        "id": "s1",
        "mon_source_id": "src1",
        "source_name": null,
        "sensor_group_id": null,
        "sensor_name": "VW-101",
        "sensor_type": "vibrating_wire",
        "active": 1,
        "created_at": "2024-01-01T00:00:00",
        "last_updated": "2024-01-02T00:00:00"
    }"#;
    let sensor: MonitoringSensor = serde_json::from_str(bare).unwrap();
    assert!(sensor.details.is_none());

    let expanded = r#"{
        "id": "s1",
        "mon_source_id": "src1",
        "source_name": "Logger A",
        "sensor_group_id": "g1",
        "sensor_name": "VW-101",
        "sensor_type": "vibrating_wire",
        "active": 1,
        "created_at": "2024-01-01T00:00:00",
        "last_updated": "2024-01-02T00:00:00",
        "details": {"mon_source_name": "Logger A", "group_name": "Nest 1"}
    }"#;
    let sensor: MonitoringSensor = serde_json::from_str(expanded).unwrap();
    assert_eq!(sensor.details.unwrap().group_name, "Nest 1");
}

#[test]
fn decodes_source_with_integer_id_and_opaque_config() {
    let json = r#"{
        "id": 42,
        "project_id": "p1",
        "location_id": "l1",
        "source_name": "north-logger",
        "folder_path": "/data/north",
        "file_keyword": "NL_",
        "file_type": "csv",
        "source_type": "datalogger",
        "config": {"delimiter": ",", "skip_rows": 2},
        "last_data_upload": {},
        "active": 1,
        "last_updated": "2024-06-01T00:00:00"
    }"#;

    let source: Source = serde_json::from_str(json).unwrap();
    assert_eq!(source.id, 42);
    assert_eq!(source.config["skip_rows"], 2);
}

#[test]
fn decodes_expanded_checklist_tree() {
    let json = r#"{
        "id": "c1",
        "template_id": "t1",
        "template_name": "Monthly dam inspection",
        "performed_at": "2024-06-01T08:00:00",
        "notes": null,
        "categories": [
            {
                "id": "cat1",
                "title": "Crest",
                "sort_order": 1,
                "items": [
                    {"id": "i1", "prompt": "Cracking visible?", "response_type": "yes_no", "sort_order": 1},
                    {"id": "i2", "prompt": "Describe condition", "response_type": "text", "sort_order": 2}
                ]
            }
        ],
        "responses": [
            {"id": "r1", "checklist_id": "c1", "template_item_id": "i1", "value": false, "created_at": "2024-06-01T08:05:00"}
        ]
    }"#;

    let expanded: ChecklistExpanded = serde_json::from_str(json).unwrap();
    assert_eq!(expanded.categories[0].items[0].response_type, ChecklistResponseType::YesNo);
    assert_eq!(expanded.categories[0].items[1].response_type, ChecklistResponseType::Text);
    assert!(expanded.responses[0].comment.is_none());
}

// ============================================================================
// Payload serialization
// ============================================================================

#[test]
fn patch_payload_omits_unset_fields() {
    let payload = LocationPayload { frequency: Some("1h".to_string()), ..Default::default() };

    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["frequency"], "1h");
}

#[test]
fn payloads_never_emit_server_assigned_fields() {
    let payload = ProjectPayload {
        project_name: "Quarry West".to_string(),
        description: "Groundwater drawdown".to_string(),
        start_date: "2024-05-01".to_string(),
        active: 1,
        status: "active".to_string(),
        project_number: Some("Q-104".to_string()),
        end_date: None,
    };

    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("created_at"));
    assert!(!object.contains_key("last_updated"));
    assert!(!object.contains_key("end_date"));

    let group = MonitoringGroupPayload {
        group_name: Some("Nest 2".to_string()),
        ..Default::default()
    };
    let object = serde_json::to_value(&group).unwrap();
    assert_eq!(object.as_object().unwrap().len(), 1);
}

#[test]
fn bulk_request_round_trips_logger_rows() {
    let request = BulkSensorDataRequest {
        items: vec![BulkSensorDataItem {
            timestamp: "2024-06-01T00:00:00Z".to_string(),
            source_id: "42".to_string(),
            mon_loc_id: "l1".to_string(),
            sensor_type: "vibrating_wire".to_string(),
            sensors: vec![SensorReading {
                sensor: "s1".to_string(),
                data: vec![
                    FieldValue { field: "f1".to_string(), value: 12.5 },
                    FieldValue { field: "f2".to_string(), value: -3.0 },
                ],
            }],
        }],
    };

    let json = serde_json::to_string(&request).unwrap();
    let back: BulkSensorDataRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
    assert_eq!(back.items[0].sensors[0].data[1].value, -3.0);
}

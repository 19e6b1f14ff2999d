//! End-to-end mapping through the registry: JSON request bodies in,
//! JSON response bodies out.

use booking_config::AppConfig;
use booking_core::{
    AppointmentCto, AppointmentEto, AppointmentId, AppointmentStatus, ClientEto, ClientId,
    SpecialistEto, SpecialistId, Specialization, TreatmentCto, TreatmentEto, TreatmentId,
};
use booking_service::{AppointmentRequest, ServiceMappers, TreatmentRequest};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn mappers() -> ServiceMappers {
    ServiceMappers::bootstrap(&AppConfig::default()).unwrap()
}

fn massage() -> TreatmentCto {
    TreatmentCto {
        treatment: TreatmentEto {
            id: Some(TreatmentId(1)),
            name: Some("Massage".to_string()),
            duration_minutes: 60,
        },
        specialist: SpecialistEto {
            id: Some(SpecialistId(9)),
            specialization: Specialization::named("Physio"),
        },
    }
}

#[test]
fn booking_request_body_becomes_booking_intent() {
    let request: AppointmentRequest = serde_json::from_value(json!({
        "clientId": 7,
        "treatmentId": 3,
        "dateTime": "2024-01-01T10:00:00Z"
    }))
    .unwrap();

    let eto = mappers().appointments().to_booking_eto(&request);

    assert_eq!(eto.client_id, ClientId(7));
    assert_eq!(eto.treatment_id, TreatmentId(3));
    assert_eq!(eto.specialist_id, SpecialistId(0));
    assert_eq!(eto.date_time, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
}

#[test]
fn appointment_read_model_becomes_response_body() {
    let cto = AppointmentCto {
        appointment: AppointmentEto {
            id: AppointmentId(11),
            date_time: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            status: AppointmentStatus::Finished,
        },
        client: ClientEto::new(ClientId(7)),
        treatment: massage(),
    };

    let body = serde_json::to_value(mappers().appointments().to_api_appointment(&cto)).unwrap();

    assert_eq!(
        body,
        json!({
            "id": 11,
            "clientId": 7,
            "treatmentId": 1,
            "dateTime": "2024-01-01T10:00:00Z",
            "status": "FINISHED"
        })
    );
}

#[test]
fn empty_treatment_request_body_gets_defaults() {
    let request: TreatmentRequest = serde_json::from_value(json!({})).unwrap();

    let to = mappers().treatments().to_creation_to(&request);

    assert_eq!(to.name, None);
    assert_eq!(to.duration_minutes, 0);
    assert_eq!(to.specialist_id, None);
    assert_eq!(to.description, "Default description");
}

#[test]
fn treatment_read_model_becomes_response_bodies() {
    let registry = mappers();
    let cto = massage();

    let summary = serde_json::to_value(registry.treatments().to_api_treatment(&cto)).unwrap();
    assert_eq!(
        summary,
        json!({ "id": 1, "name": "Massage", "duration": 60, "specialistId": 9 })
    );

    let details =
        serde_json::to_value(registry.treatments().to_api_treatment_details(&cto)).unwrap();
    assert_eq!(
        details,
        json!({
            "id": 1,
            "name": "Massage",
            "duration": 60,
            "specialistId": 9,
            "specialist": { "id": 9, "name": "Physio" }
        })
    );
}

#[test]
fn treatment_without_identity_omits_absent_fields() {
    let cto = TreatmentCto {
        treatment: TreatmentEto {
            id: None,
            name: None,
            duration_minutes: 15,
        },
        specialist: SpecialistEto::default(),
    };

    let details =
        serde_json::to_value(mappers().treatments().to_api_treatment_details(&cto)).unwrap();

    assert_eq!(details, json!({ "duration": 15, "specialist": {} }));
}

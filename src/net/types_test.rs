use super::*;

#[test]
fn login_response_parses_camel_case() {
    let json = r#"{
        "accessToken": "tok-123",
        "admin": {"_id": "a1", "name": "Root", "email": "root@clinic.test"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(json).expect("parse");
    assert_eq!(resp.access_token, "tok-123");
    assert_eq!(resp.admin.id, "a1");
}

#[test]
fn doctor_round_trips_mongo_id() {
    let doctor = Doctor {
        id: "d9".into(),
        name: "Dr. Varga".into(),
        specialty: "Proctology".into(),
        email: "varga@clinic.test".into(),
        phone: "+36 1 555 0000".into(),
        status: "active".into(),
    };
    let json = serde_json::to_value(&doctor).expect("serialize");
    assert_eq!(json["_id"], "d9");
    let back: Doctor = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, doctor);
}

#[test]
fn surgery_record_tolerates_missing_optionals() {
    let json = r#"{
        "id": "s1",
        "patientName": "J. Doe",
        "patientAge": 44,
        "procedure": "Biolitec Laser LHP",
        "doctor": "Dr. Varga",
        "date": "2024-03-01",
        "status": "Completed"
    }"#;
    let record: SurgeryRecord = serde_json::from_str(json).expect("parse");
    assert_eq!(record.patient_name, "J. Doe");
    assert!(record.duration.is_none());
    assert!(record.time.is_none());
}

#[test]
fn surgery_record_accepts_mongo_id_spelling() {
    let json = r#"{
        "_id": "s2",
        "patientName": "J. Doe",
        "patientAge": 44,
        "procedure": "Biolitec Laser LHP",
        "doctor": "Dr. Varga",
        "date": "2024-03-01",
        "status": "Completed"
    }"#;
    let record: SurgeryRecord = serde_json::from_str(json).expect("parse");
    assert_eq!(record.id, "s2");
}

#[test]
fn doctor_surgeries_envelope_parses() {
    let json = r#"{"data": [], "count": 0, "doctor": null}"#;
    let resp: DoctorSurgeries = serde_json::from_str(json).expect("parse");
    assert_eq!(resp.count, 0);
    assert!(resp.doctor.is_none());
}

#[test]
fn country_name_parses_nested_common_field() {
    let json = r#"[{"name": {"common": "Hungary", "official": "Hungary"}}]"#;
    let countries: Vec<CountryName> = serde_json::from_str(json).expect("parse");
    assert_eq!(countries[0].name.common, "Hungary");
}

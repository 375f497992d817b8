use chrono::NaiveDate;
use clinic_core::{Address, AppError, Appointment, AppointmentDto, Dentist, Patient, Repository};

use crate::integration::common::setup_test_db;

/// Store one dentist and one patient, returning their ids.
async fn seed(db: &clinic_db::Database) -> (i64, i64) {
    let dentist = db
        .dentist_repo()
        .save(&Dentist::new("Ana", "Paz", "MP100"))
        .await
        .unwrap();
    let patient = db
        .patient_repo()
        .save(&Patient {
            id: None,
            name: "Juan".into(),
            last_name: "Pérez".into(),
            card_identity: "30111222".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            email: "juan@example.com".into(),
            address: Address {
                street: "Av. Siempre Viva".into(),
                number: 742,
                location: "Rosario".into(),
                province: "Santa Fe".into(),
            },
        })
        .await
        .unwrap();
    (dentist.id.unwrap(), patient.id.unwrap())
}

#[tokio::test]
async fn book_and_read_appointment() {
    let (db, _container) = setup_test_db().await;
    let (dentist_id, patient_id) = seed(&db).await;
    let service = db.appointment_service();

    let saved = service
        .save(AppointmentDto {
            id: None,
            dentist_id,
            patient_id,
            date: "2025-06-15T10:30".into(),
        })
        .await
        .unwrap();

    let found = service
        .find_by_id(saved.id.unwrap())
        .await
        .unwrap()
        .expect("Should find the appointment");
    assert_eq!(found.date, "2025-06-15T10:30:00");
    assert_eq!(found.dentist_id, dentist_id);
    assert_eq!(found.patient_id, patient_id);
}

#[tokio::test]
async fn update_missing_appointment_is_not_found() {
    let (db, _container) = setup_test_db().await;
    let (dentist_id, patient_id) = seed(&db).await;

    let err = db
        .appointment_service()
        .update(AppointmentDto {
            id: Some(77),
            dentist_id,
            patient_id,
            date: "2025-06-15".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { id: 77, .. }));
}

#[tokio::test]
async fn insert_with_vanished_dentist_is_validation_error() {
    let (db, _container) = setup_test_db().await;
    let (dentist_id, patient_id) = seed(&db).await;
    db.dentist_repo().delete_by_id(dentist_id).await.unwrap();

    // Straight to the repository, as if the dentist was deleted after the
    // service checked it.
    let err = db
        .appointment_repo()
        .save(&Appointment {
            id: None,
            dentist_id,
            patient_id,
            date: NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn deleting_dentist_cascades_to_appointments() {
    let (db, _container) = setup_test_db().await;
    let (dentist_id, patient_id) = seed(&db).await;
    let service = db.appointment_service();

    let saved = service
        .save(AppointmentDto {
            id: None,
            dentist_id,
            patient_id,
            date: "2025-06-15".into(),
        })
        .await
        .unwrap();

    db.dentist_service().delete(dentist_id).await.unwrap();

    assert!(service.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
    assert!(service.find_all().await.unwrap().is_empty());
}

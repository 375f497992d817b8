use clinic_core::{AppError, Dentist, Repository};

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn save_assigns_id_and_find_returns_it() {
    let (db, _container) = setup_test_db().await;
    let repo = db.dentist_repo();

    let saved = repo
        .save(&Dentist::new("Ana", "Paz", "MP100").with_specialty("Orthodontics"))
        .await
        .unwrap();
    let id = saved.id.expect("Store should assign an id");

    let found = repo
        .find_by_id(id)
        .await
        .unwrap()
        .expect("Should find the dentist");
    assert_eq!(found, saved);
    assert_eq!(found.registration_number, "MP100");
    assert_eq!(found.specialty, "Orthodontics");
}

#[tokio::test]
async fn save_with_id_updates_row() {
    let (db, _container) = setup_test_db().await;
    let repo = db.dentist_repo();

    let mut saved = repo
        .save(&Dentist::new("Ana", "Paz", "MP100"))
        .await
        .unwrap();
    saved.last_name = "Núñez".into();

    let updated = repo.save(&saved).await.unwrap();
    assert_eq!(updated, saved);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].last_name, "Núñez");
}

#[tokio::test]
async fn save_with_unknown_id_is_not_found() {
    let (db, _container) = setup_test_db().await;
    let repo = db.dentist_repo();

    let mut ghost = Dentist::new("Ana", "Paz", "MP100");
    ghost.id = Some(404);

    let err = repo.save(&ghost).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 404, .. }));
}

#[tokio::test]
async fn find_all_is_ordered_by_id() {
    let (db, _container) = setup_test_db().await;
    let repo = db.dentist_repo();

    for reg in ["A1", "B2", "C3"] {
        repo.save(&Dentist::new("Ana", "Paz", reg)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let ids: Vec<i64> = all.iter().filter_map(|d| d.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(all.len(), 3);
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (db, _container) = setup_test_db().await;
    let repo = db.dentist_repo();

    let saved = repo
        .save(&Dentist::new("Ana", "Paz", "MP100"))
        .await
        .unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(id).await.unwrap();
    repo.delete_by_id(id).await.unwrap();
    repo.delete_by_id(9_999).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.exists_by_id(id).await.unwrap());
}

#[tokio::test]
async fn health_check_succeeds() {
    let (db, _container) = setup_test_db().await;
    db.health_check().await.unwrap();
}

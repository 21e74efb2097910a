use bson::{doc, oid::ObjectId};
use mongodb::{Client, Database, IndexModel};
use tokio_test::assert_ok;

use taskly::config::database;
use taskly::modules::community_dept::crud::{CommunityDeptCrud, IndexError};
use taskly::modules::community_dept::model::CommunityDept;

async fn setup_test_db() -> (Client, Database) {
    dotenvy::dotenv().ok();

    let uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = database::connect(&uri).await.unwrap();
    let db = client.database(&format!("taskly_test_{}", ObjectId::new().to_hex()));

    (client, db)
}

async fn teardown(client: Client, db: Database) {
    db.drop().await.unwrap();
    client.shutdown().await;
}

/// Materializes the collection and both legacy indexes.
async fn seed_dept_with_indexes(depts: &CommunityDeptCrud) {
    depts
        .create(CommunityDept::new("Logistics".to_string(), ObjectId::new()))
        .await
        .unwrap();

    let created_by = depts
        .create_index(IndexModel::builder().keys(doc! { "CreatedBy": 1 }).build())
        .await
        .unwrap();
    let name = depts
        .create_index(IndexModel::builder().keys(doc! { "name": 1 }).build())
        .await
        .unwrap();

    assert_eq!(created_by, "CreatedBy_1");
    assert_eq!(name, "name_1");
}

fn index_names(indexes: &[IndexModel]) -> Vec<String> {
    indexes
        .iter()
        .filter_map(|ix| ix.options.as_ref().and_then(|opts| opts.name.clone()))
        .collect()
}

#[tokio::test]
async fn test_drop_existing_indexes() {
    let (client, db) = setup_test_db().await;
    let depts = CommunityDeptCrud::new(&db);
    seed_dept_with_indexes(&depts).await;

    assert_ok!(depts.drop_index("CreatedBy_1").await);
    assert_ok!(depts.drop_index("name_1").await);

    let remaining = index_names(&depts.list_indexes().await.unwrap());
    assert!(remaining.contains(&"_id_".to_string()));
    assert!(!remaining.contains(&"CreatedBy_1".to_string()));
    assert!(!remaining.contains(&"name_1".to_string()));

    teardown(client, db).await;
}

#[tokio::test]
async fn test_drop_absent_index_reports_not_found() {
    let (client, db) = setup_test_db().await;
    let depts = CommunityDeptCrud::new(&db);

    // Collection exists, index never created
    depts
        .create(CommunityDept::new("Security".to_string(), ObjectId::new()))
        .await
        .unwrap();

    let err = depts.drop_index("CreatedBy_1").await.unwrap_err();
    match err {
        IndexError::NotFound(name) => assert_eq!(name, "CreatedBy_1"),
        other => panic!("expected NotFound, got {:?}", other),
    }

    teardown(client, db).await;
}

#[tokio::test]
async fn test_drop_sequence_is_idempotent() {
    let (client, db) = setup_test_db().await;
    let depts = CommunityDeptCrud::new(&db);
    seed_dept_with_indexes(&depts).await;

    for name in ["CreatedBy_1", "name_1"] {
        assert_ok!(depts.drop_index(name).await);
    }

    // Second pass finds both gone and reports it as such
    for name in ["CreatedBy_1", "name_1"] {
        assert!(matches!(
            depts.drop_index(name).await,
            Err(IndexError::NotFound(_))
        ));
    }

    let remaining = index_names(&depts.list_indexes().await.unwrap());
    assert_eq!(remaining, vec!["_id_".to_string()]);

    teardown(client, db).await;
}

#[tokio::test]
async fn test_other_drop_errors_stay_fatal() {
    let (client, db) = setup_test_db().await;
    let depts = CommunityDeptCrud::new(&db);

    depts
        .create(CommunityDept::new("Archive".to_string(), ObjectId::new()))
        .await
        .unwrap();

    // The server refuses to drop `_id_` with an InvalidOptions error, which
    // must not be mistaken for the recoverable not-found case.
    let err = depts.drop_index("_id_").await.unwrap_err();
    assert!(matches!(err, IndexError::Database(_)));

    teardown(client, db).await;
}

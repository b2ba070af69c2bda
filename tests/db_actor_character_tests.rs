mod common;

use holocron::db::CharacterCreate;

fn create(name: &str, height: &str) -> CharacterCreate {
    CharacterCreate {
        name: name.to_string(),
        height: Some(height.to_string()),
        mass: Some("77".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some("male".to_string()),
    }
}

#[tokio::test]
async fn upsert_overwrites_fields_and_keeps_favorite() {
    let path = common::unique_sqlite_path("db-upsert");
    let db = common::spawn_db(&path).await;

    assert!(db.list_all().await.unwrap().is_empty());

    let id = db.upsert(create("Luke Skywalker", "172")).await.unwrap();
    assert!(id > 0);
    assert_eq!(db.set_favorite("Luke Skywalker", true).await.unwrap(), 1);

    let second_id = db.upsert(create("Luke Skywalker", "180")).await.unwrap();
    assert_eq!(second_id, id, "upsert must reuse the existing row");

    let rows = db.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].height.as_deref(), Some("180"));
    assert!(rows[0].favorite, "re-import must not reset the favorite flag");

    common::cleanup_sqlite(&path);
}

#[tokio::test]
async fn names_are_case_insensitive() {
    let path = common::unique_sqlite_path("db-nocase");
    let db = common::spawn_db(&path).await;

    db.upsert(create("Leia Organa", "150")).await.unwrap();
    db.upsert(create("LEIA ORGANA", "151")).await.unwrap();

    let rows = db.list_all().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "LEIA ORGANA");
    assert_eq!(rows[0].height.as_deref(), Some("151"));

    let fetched = db.get_by_name("leia organa").await.unwrap();
    assert_eq!(fetched.as_ref().map(|c| c.id), Some(rows[0].id));
    assert!(db.get_by_name("Han Solo").await.unwrap().is_none());

    common::cleanup_sqlite(&path);
}

#[tokio::test]
async fn favorites_list_only_flagged_rows() {
    let path = common::unique_sqlite_path("db-favorites");
    let db = common::spawn_db(&path).await;

    for name in ["A", "B", "C", "D"] {
        db.upsert(create(name, "100")).await.unwrap();
    }
    assert!(db.list_favorites().await.unwrap().is_empty());

    assert_eq!(db.set_favorite("A", true).await.unwrap(), 1);
    assert_eq!(db.set_favorite("C", true).await.unwrap(), 1);
    assert_eq!(db.set_favorite("Z", true).await.unwrap(), 0);

    let mut names: Vec<String> = db
        .list_favorites()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["A", "C"]);

    assert_eq!(db.set_favorite("A", false).await.unwrap(), 1);
    let favorites = db.list_favorites().await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].name, "C");

    common::cleanup_sqlite(&path);
}

#[tokio::test]
async fn delete_by_name_then_delete_all() {
    let path = common::unique_sqlite_path("db-delete");
    let db = common::spawn_db(&path).await;

    for name in ["Luke Skywalker", "Leia Organa", "Han Solo"] {
        db.upsert(create(name, "170")).await.unwrap();
    }

    assert_eq!(db.delete_by_name("Han Solo").await.unwrap(), 1);
    assert_eq!(db.delete_by_name("Han Solo").await.unwrap(), 0);
    assert_eq!(db.list_all().await.unwrap().len(), 2);

    assert_eq!(db.delete_all().await.unwrap(), 2);
    assert!(db.list_all().await.unwrap().is_empty());
    assert_eq!(db.delete_all().await.unwrap(), 0);

    common::cleanup_sqlite(&path);
}

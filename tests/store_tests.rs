mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use futures_util::future::join_all;

use intake::dto::OrderRequest;
use intake::ids;
use intake::models::{Client, ClientContact, Order, ProjectFields};
use intake::services::orders::build_order;
use intake::store::{MemoryStore, PageWindow, Store, StoreError};

fn contact(email: &str, name: &str) -> ClientContact {
    ClientContact {
        email: email.to_string(),
        name: name.to_string(),
        phone: String::new(),
        company: String::new(),
    }
}

fn order_at(email: &str, offset_secs: i64) -> Order {
    let req = OrderRequest {
        email: email.to_string(),
        client_name: "Tester".to_string(),
        ..Default::default()
    };
    build_order(
        req,
        ids::new_order_id(),
        ids::timestamp() + Duration::seconds(offset_secs),
    )
}

async fn project_contract(store: &dyn Store) {
    let fields = ProjectFields {
        client_name: "Ada".into(),
        email: "ada@example.com".into(),
        services: r#"["logo"]"#.into(),
        ..Default::default()
    };
    let first = store.create_project(&fields).await.unwrap();
    let second = store.create_project(&fields).await.unwrap();
    assert!(second > first);

    let replaced = ProjectFields {
        status: Some("approved".into()),
        ..fields.clone()
    };
    let updated = store.update_project(first, &replaced).await.unwrap();
    assert_eq!(updated.status.as_deref(), Some("approved"));

    let (all, total) = store.list_projects(None).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![first, second]);

    let (page, total) = store
        .list_projects(Some(PageWindow { limit: 1, offset: 1 }))
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(page[0].id, second);

    store.delete_project(first).await.unwrap();
    assert!(matches!(
        store.delete_project(first).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.update_project(first, &fields).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_project(first).await,
        Err(StoreError::NotFound { .. })
    ));
}

async fn order_contract(store: &dyn Store) {
    let older = order_at("o@x.com", -10);
    let newer = order_at("o@x.com", 0);
    store.create_order(&newer).await.unwrap();
    store.create_order(&older).await.unwrap();

    assert!(matches!(
        store.create_order(&older).await,
        Err(StoreError::ConstraintViolation(_))
    ));

    let (rows, total) = store
        .list_orders(PageWindow { limit: 10, offset: 0 })
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(rows[0].id, newer.id);
    assert_eq!(rows[1].id, older.id);
    assert_eq!(rows[1], older);

    // Same timestamp twice still moves updated_at forward.
    let at = newer.updated_at;
    let first = store.update_order_status(&newer.id, "in_progress", at).await.unwrap();
    let second = store.update_order_status(&newer.id, "completed", at).await.unwrap();
    assert!(first.updated_at > newer.updated_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.status, "completed");

    assert!(matches!(
        store.update_order_status("ORD-missing", "x", Utc::now()).await,
        Err(StoreError::NotFound { .. })
    ));

    assert!(matches!(
        store.delete_order("ORD-missing").await,
        Err(StoreError::NotFound { .. })
    ));
    let (_, total) = store
        .list_orders(PageWindow { limit: 10, offset: 0 })
        .await
        .unwrap();
    assert_eq!(total, 2);

    store.delete_order(&older.id).await.unwrap();
    assert!(matches!(
        store.get_order(&older.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

async fn client_contract(store: &dyn Store) {
    let at = ids::timestamp();
    let client = Client::first_order(ids::new_client_id(), &contact("c@x.com", "C"), at);
    store.create_client(&client).await.unwrap();

    let duplicate = Client::first_order(ids::new_client_id(), &contact("c@x.com", "Other"), at);
    assert!(matches!(
        store.create_client(&duplicate).await,
        Err(StoreError::ConstraintViolation(_))
    ));

    let mut fetched = store.get_client_by_email("c@x.com").await.unwrap();
    assert_eq!(fetched, client);

    fetched.apply_order(&contact("c@x.com", "C2"), at + Duration::seconds(1));
    store.update_client(&fetched).await.unwrap();
    let reread = store.get_client_by_email("c@x.com").await.unwrap();
    assert_eq!(reread.total_orders, 2);
    assert_eq!(reread.name, "C2");

    let ghost = Client::first_order(ids::new_client_id(), &contact("ghost@x.com", "G"), at);
    assert!(matches!(
        store.update_client(&ghost).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_client_by_email("ghost@x.com").await,
        Err(StoreError::NotFound { .. })
    ));

    let later = at + Duration::seconds(5);
    let recorded = store
        .record_order(&ids::new_client_id(), &contact("c@x.com", "C3"), later)
        .await
        .unwrap();
    assert_eq!(recorded.id, client.id);
    assert_eq!(recorded.total_orders, 3);
    assert_eq!(recorded.last_order_date, Some(later));
    assert_eq!(recorded.created_at, client.created_at);

    let (clients, total) = store.list_clients(None).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(clients.len(), 1);
}

async fn out_of_order_record_keeps_latest_date(store: &dyn Store) {
    let older = ids::timestamp();
    let newer = older + Duration::seconds(10);

    store
        .record_order(&ids::new_client_id(), &contact("late@x.com", "L"), newer)
        .await
        .unwrap();
    let client = store
        .record_order(&ids::new_client_id(), &contact("late@x.com", "L"), older)
        .await
        .unwrap();
    assert_eq!(client.total_orders, 2);
    assert_eq!(client.last_order_date, Some(newer));

    let reread = store.get_client_by_email("late@x.com").await.unwrap();
    assert_eq!(reread.last_order_date, Some(newer));
}

async fn concurrent_record_order(store: Arc<dyn Store>) {
    let at = ids::timestamp();
    let tasks = (0..20).map(|i| {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .record_order(&ids::new_client_id(), &contact("burst@x.com", &format!("B{i}")), at)
                .await
        })
    });

    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let client = store.get_client_by_email("burst@x.com").await.unwrap();
    assert_eq!(client.total_orders, 20);
}

// ── In-memory backend ───────────────────────────────────────────

#[tokio::test]
async fn memory_project_contract() {
    project_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn memory_order_contract() {
    order_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn memory_client_contract() {
    client_contract(&MemoryStore::new()).await;
}

#[tokio::test]
async fn memory_out_of_order_record() {
    out_of_order_record_keeps_latest_date(&MemoryStore::new()).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn memory_concurrent_record_order() {
    concurrent_record_order(Arc::new(MemoryStore::new())).await;
}

// ── Postgres backend ────────────────────────────────────────────

#[tokio::test]
async fn postgres_project_contract() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    project_contract(&db.store).await;
    common::cleanup_db(db).await;
}

#[tokio::test]
async fn postgres_order_contract() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    order_contract(&db.store).await;
    common::cleanup_db(db).await;
}

#[tokio::test]
async fn postgres_client_contract() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    client_contract(&db.store).await;
    common::cleanup_db(db).await;
}

#[tokio::test]
async fn postgres_out_of_order_record() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    out_of_order_record_keeps_latest_date(&db.store).await;
    common::cleanup_db(db).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn postgres_concurrent_record_order() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    concurrent_record_order(Arc::new(db.store.clone())).await;
    common::cleanup_db(db).await;
}

#[tokio::test]
async fn postgres_backed_api_reconciles() {
    let Some(db) = common::spawn_db().await else {
        return;
    };
    let app = common::spawn_app_with(Arc::new(db.store.clone())).await;

    app.create_order("a@x.com", "A").await;
    app.create_order("a@x.com", "A").await;

    let (clients, _) = app.get("/api/clients").await;
    let clients = clients["data"].as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["totalOrders"], 2);

    let (orders, _) = app.get("/api/orders?page=2&limit=1").await;
    assert_eq!(orders["pagination"]["totalPages"], 2);

    common::cleanup_db(db).await;
}

use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use proffy_core::models::class::{ClassFilter, ClassListing, CreatedClass, NewClass};
use proffy_db::mock::{memory::InMemoryClassStore, repositories::MockClassStore};
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{create_class_body, test_server};

fn listing(subject: &str) -> ClassListing {
    ClassListing {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        cost: 60.0,
        user_id: Uuid::new_v4(),
        name: "Ana".to_string(),
        avatar: "https://avatars.example.com/ana.png".to_string(),
        whatsapp: "5511999999999".to_string(),
        bio: "Algebra and geometry".to_string(),
    }
}

#[rstest]
#[case(&[("week_day", "2"), ("time", "08:00")])]
#[case(&[("subject", "Math"), ("time", "08:00")])]
#[case(&[("subject", "Math"), ("week_day", "2")])]
#[case(&[("subject", ""), ("week_day", "2"), ("time", "08:00")])]
#[case(&[])]
#[tokio::test]
async fn test_search_without_all_filters_is_rejected(#[case] params: &[(&str, &str)]) {
    let mut store = MockClassStore::new();
    store.expect_search_classes().times(0);
    let server = test_server(Arc::new(store));

    let mut request = server.get("/classes");
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    let response = request.await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing filters to search classes" }));
}

#[rstest]
#[case("monday", "08:00")]
#[case("1", "25:00")]
#[tokio::test]
async fn test_search_with_malformed_filters_is_rejected(
    #[case] week_day: &str,
    #[case] time: &str,
) {
    let mut store = MockClassStore::new();
    store.expect_search_classes().times(0);
    let server = test_server(Arc::new(store));

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", week_day)
        .add_query_param("time", time)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
}

#[tokio::test]
async fn test_search_passes_converted_filter_to_store() {
    let expected = vec![listing("Math")];
    let returned = expected.clone();

    let mut store = MockClassStore::new();
    store
        .expect_search_classes()
        .withf(|filter: &ClassFilter| {
            filter
                == &ClassFilter {
                    subject: "Math".to_string(),
                    week_day: 2,
                    time_in_minutes: 510,
                }
        })
        .times(1)
        .returning(move |_| Ok(returned.clone()));
    let server = test_server(Arc::new(store));

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", "2")
        .add_query_param("time", "08:30")
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Vec<ClassListing>>(), expected);
}

#[tokio::test]
async fn test_search_without_matches_returns_empty_list() {
    let mut store = MockClassStore::new();
    store
        .expect_search_classes()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let server = test_server(Arc::new(store));

    let response = server
        .get("/classes")
        .add_query_param("subject", "Chemistry")
        .add_query_param("week_day", "0")
        .add_query_param("time", "23:00")
        .await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!([]));
}

#[test_log::test(tokio::test)]
async fn test_search_store_failure_is_not_leaked() {
    let mut store = MockClassStore::new();
    store
        .expect_search_classes()
        .returning(|_| Err(eyre::eyre!("connection refused by 10.0.0.5")));
    let server = test_server(Arc::new(store));

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", "2")
        .add_query_param("time", "08:00")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_create_converts_schedule_and_returns_created() {
    let mut store = MockClassStore::new();
    store
        .expect_create_class()
        .withf(|new_class: &NewClass| {
            new_class.subject == "Physics"
                && new_class.cost == 80.0
                && new_class
                    .schedule
                    .iter()
                    .map(|slot| (slot.week_day, slot.from, slot.to))
                    .eq([(1, 480, 720), (3, 840, 1110)])
        })
        .times(1)
        .returning(|new_class| {
            Ok(CreatedClass {
                user_id: Uuid::new_v4(),
                class_id: Uuid::new_v4(),
                slot_count: new_class.schedule.len(),
            })
        });
    let server = test_server(Arc::new(store));

    let response = server
        .post("/classes")
        .json(&create_class_body(
            "Physics",
            json!([
                { "week_day": 1, "from": "08:00", "to": "12:00" },
                { "week_day": "3", "from": "14:00", "to": "18:30" }
            ]),
        ))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.text(), "");
}

#[test_log::test(tokio::test)]
async fn test_create_with_malformed_time_never_reaches_store() {
    let mut store = MockClassStore::new();
    store.expect_create_class().times(0);
    let server = test_server(Arc::new(store));

    let response = server
        .post("/classes")
        .json(&create_class_body(
            "Physics",
            json!([{ "week_day": 1, "from": "eight", "to": "12:00" }]),
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Unexpected error while creating new class" }));
}

#[rstest]
#[case(json!({ "subject": "Physics", "cost": 80, "schendule": [] }))]
#[case(json!({
    "name": "Diego", "avatar": "", "whatsapp": "", "bio": "",
    "subject": "Physics", "cost": "eighty", "schendule": []
}))]
#[case(json!([]))]
#[tokio::test]
async fn test_create_with_malformed_body_is_a_creation_failure(#[case] body: Value) {
    let mut store = MockClassStore::new();
    store.expect_create_class().times(0);
    let server = test_server(Arc::new(store));

    let response = server.post("/classes").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Unexpected error while creating new class" }));
}

#[test_log::test(tokio::test)]
async fn test_create_store_failure_is_not_leaked() {
    let mut store = MockClassStore::new();
    store
        .expect_create_class()
        .times(1)
        .returning(|_| Err(eyre::eyre!("violates foreign key constraint \"classes_user_id_fkey\"")));
    let server = test_server(Arc::new(store));

    let response = server
        .post("/classes")
        .json(&create_class_body(
            "Physics",
            json!([{ "week_day": 1, "from": "08:00", "to": "12:00" }]),
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!response.text().contains("foreign key"));
    response.assert_json(&json!({ "error": "Unexpected error while creating new class" }));
}

#[rstest]
#[case("08:00", true)]
#[case("09:59", true)]
#[case("10:00", false)]
#[case("07:59", false)]
#[tokio::test]
async fn test_created_class_is_found_inside_its_window(#[case] time: &str, #[case] found: bool) {
    let store = Arc::new(InMemoryClassStore::new());
    let server = test_server(store.clone());

    server
        .post("/classes")
        .json(&create_class_body(
            "Math",
            json!([{ "week_day": 2, "from": "08:00", "to": "10:00" }]),
        ))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", "2")
        .add_query_param("time", time)
        .await;

    response.assert_status(StatusCode::OK);
    let classes: Vec<ClassListing> = response.json();
    assert_eq!(classes.len(), usize::from(found));
}

#[tokio::test]
async fn test_created_class_is_not_found_on_other_days() {
    let store = Arc::new(InMemoryClassStore::new());
    let server = test_server(store.clone());

    server
        .post("/classes")
        .json(&create_class_body(
            "Math",
            json!([{ "week_day": 2, "from": "08:00", "to": "10:00" }]),
        ))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", "3")
        .add_query_param("time", "08:30")
        .await;

    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_create_stores_one_user_one_class_and_every_slot() {
    let store = Arc::new(InMemoryClassStore::new());
    let server = test_server(store.clone());
    let body = create_class_body(
        "Biology",
        json!([
            { "week_day": 1, "from": "08:00", "to": "10:00" },
            { "week_day": 3, "from": "13:30", "to": "15:00" },
            { "week_day": 5, "from": "19:00", "to": "21:45" }
        ]),
    );

    server
        .post("/classes")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let tables = store.snapshot();
    assert_eq!(tables.users.len(), 1);
    assert_eq!(tables.classes.len(), 1);
    assert_eq!(tables.users[0].name, body["name"].as_str().unwrap());
    assert_eq!(tables.classes[0].user_id, tables.users[0].id);
    assert_eq!(tables.classes[0].subject, "Biology");

    let windows: Vec<_> = tables
        .schedule
        .iter()
        .map(|slot| (slot.class_id, slot.week_day, slot.from, slot.to))
        .collect();
    let class_id = tables.classes[0].id;
    assert_eq!(
        windows,
        vec![
            (class_id, 1, 480, 600),
            (class_id, 3, 810, 900),
            (class_id, 5, 1140, 1305),
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_create_failing_on_a_later_slot_persists_nothing() {
    let store = Arc::new(InMemoryClassStore::failing_on_slot(2));
    let server = test_server(store.clone());

    let response = server
        .post("/classes")
        .json(&create_class_body(
            "Math",
            json!([
                { "week_day": 1, "from": "08:00", "to": "10:00" },
                { "week_day": 2, "from": "08:00", "to": "10:00" },
                { "week_day": 3, "from": "08:00", "to": "10:00" }
            ]),
        ))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Unexpected error while creating new class" }));

    let tables = store.snapshot();
    assert!(tables.users.is_empty());
    assert!(tables.classes.is_empty());
    assert!(tables.schedule.is_empty());
}

#[tokio::test]
async fn test_identical_creations_produce_distinct_classes() {
    let store = Arc::new(InMemoryClassStore::new());
    let server = test_server(store.clone());
    let body = create_class_body(
        "Math",
        json!([{ "week_day": 4, "from": "10:00", "to": "11:00" }]),
    );

    for _ in 0..2 {
        server
            .post("/classes")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/classes")
        .add_query_param("subject", "Math")
        .add_query_param("week_day", "4")
        .add_query_param("time", "10:30")
        .await;

    let classes: Vec<ClassListing> = response.json();
    assert_eq!(classes.len(), 2);
    assert_ne!(classes[0].id, classes[1].id);
    assert_ne!(classes[0].user_id, classes[1].user_id);
    assert_eq!(store.snapshot().schedule.len(), 2);
}

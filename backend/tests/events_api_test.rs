mod common;

use uuid::Uuid;

#[tokio::test]
async fn create_event_persists_sub_records_and_round_trips() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Rust Workshop",
            "description": "Hands-on introduction",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
            "background_image": "data:image/png;base64,aGVsbG8=",
            "dates": [
                { "starts_at": "2024-03-05T09:30:00Z", "ends_at": "2024-03-05T11:00:00Z" },
                { "starts_at": "2024-03-06T09:30:00Z", "ends_at": "2024-03-06T11:00:00Z" }
            ],
            "certificate": { "template_id": Uuid::new_v4() }
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let created: serde_json::Value = resp.json().await.unwrap();
    let event_id = created["id"].as_str().unwrap();

    assert_eq!(
        created["background_image_url"].as_str().unwrap(),
        common::UPLOADED_IMAGE_URL
    );
    assert_eq!(created["dates"].as_array().unwrap().len(), 2);
    for range in created["dates"].as_array().unwrap() {
        assert_eq!(range["event_id"].as_str().unwrap(), event_id);
    }
    assert_eq!(
        created["certificate"]["event_id"].as_str().unwrap(),
        event_id
    );

    // The certificate is retrievable on its own, stamped with the event id.
    let resp = client
        .get(format!("http://{}/api/events/{}/certificate", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let certificate: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(certificate["event_id"].as_str().unwrap(), event_id);

    let resp = client
        .get(format!("http://{}/api/events/{}", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(fetched["name"].as_str().unwrap(), "Rust Workshop");
}

#[tokio::test]
async fn display_listing_resolves_names_and_formats_schedule() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "maria").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Rust Workshop",
            "description": "Hands-on introduction",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/events/display", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let displays: serde_json::Value = resp.json().await.unwrap();
    let displays = displays.as_array().unwrap();
    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0]["organizer"].as_str().unwrap(), "maria");
    assert_eq!(displays[0]["location"].as_str().unwrap(), "Auditorium A");
    assert_eq!(displays[0]["start_date"].as_str().unwrap(), "05/03/2024");
    assert_eq!(displays[0]["start_time"].as_str().unwrap(), "09:30");
    assert_eq!(displays[0]["end_date"].as_str().unwrap(), "05/03/2024");
    assert_eq!(displays[0]["end_time"].as_str().unwrap(), "11:00");
}

#[tokio::test]
async fn display_listing_with_unknown_organizer_is_a_404() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    // Organizer id that no user record backs.
    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Orphaned",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": Uuid::new_v4(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/events/display", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_overlays_present_fields_only() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Original",
            "description": "A",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
        }))
        .send()
        .await
        .unwrap();
    let created: serde_json::Value = resp.json().await.unwrap();
    let event_id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("http://{}/api/events/{}", addr, event_id))
        .json(&serde_json::json!({ "name": "B" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let updated: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(updated["name"].as_str().unwrap(), "B");
    assert_eq!(updated["description"].as_str().unwrap(), "A");
}

#[tokio::test]
async fn inverted_date_range_is_rejected() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Backwards",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
            "dates": [
                { "starts_at": "2024-03-06T11:00:00Z", "ends_at": "2024-03-06T09:30:00Z" }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn missing_event_maps_to_404_and_delete_works() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let resp = client
        .get(format!("http://{}/api/events/{}", addr, Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("http://{}/api/events/{}", addr, Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Short-lived",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
        }))
        .send()
        .await
        .unwrap();
    let created: serde_json::Value = resp.json().await.unwrap();
    let event_id = created["id"].as_str().unwrap().to_string();

    let resp = client
        .delete(format!("http://{}/api/events/{}", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/events/{}", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn participants_register_resolve_and_unregister() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;
    let participant_id = common::create_user(&client, addr, "participant").await;

    let resp = client
        .post(format!("http://{}/api/events", addr))
        .json(&serde_json::json!({
            "name": "Rust Workshop",
            "starts_at": "2024-03-05T09:30:00Z",
            "ends_at": "2024-03-05T11:00:00Z",
            "location_id": location_id,
            "organizer_id": organizer_id,
        }))
        .send()
        .await
        .unwrap();
    let created: serde_json::Value = resp.json().await.unwrap();
    let event_id = created["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("http://{}/api/events/{}/participants", addr, event_id))
        .json(&serde_json::json!({ "user_id": participant_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/events/{}/participants", addr, event_id))
        .send()
        .await
        .unwrap();
    let participants: serde_json::Value = resp.json().await.unwrap();
    let participants = participants.as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["name"].as_str().unwrap(), "participant");

    let resp = client
        .delete(format!(
            "http://{}/api/events/{}/participants/{}",
            addr, event_id, participant_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/events/{}/participants", addr, event_id))
        .send()
        .await
        .unwrap();
    let participants: serde_json::Value = resp.json().await.unwrap();
    assert!(participants.as_array().unwrap().is_empty());
}

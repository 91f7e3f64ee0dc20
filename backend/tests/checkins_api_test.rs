mod common;

use uuid::Uuid;

async fn create_event(
    client: &reqwest::Client,
    addr: std::net::SocketAddr,
    organizer_id: Uuid,
    location_id: Uuid,
) -> String {
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
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn checkin_round_trip() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let organizer_id = common::create_user(&client, addr, "organizer").await;
    let location_id = common::create_location(&client, addr, "Auditorium A").await;
    let attendee_id = common::create_user(&client, addr, "attendee").await;
    let event_id = create_event(&client, addr, organizer_id, location_id).await;

    let resp = client
        .post(format!("http://{}/api/checkins", addr))
        .json(&serde_json::json!({
            "event_id": event_id,
            "user_id": attendee_id,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let recorded: serde_json::Value = resp.json().await.unwrap();
    assert!(recorded["checked_in_at"].is_string());
    let checkin_id = recorded["id"].as_str().unwrap().to_string();

    let resp = client
        .get(format!("http://{}/api/events/{}/checkins", addr, event_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let listed: serde_json::Value = resp.json().await.unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["user_id"].as_str().unwrap(), attendee_id.to_string());

    let resp = client
        .delete(format!("http://{}/api/checkins/{}", addr, checkin_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("http://{}/api/checkins/{}", addr, checkin_id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn checkin_against_unknown_event_is_a_404() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let attendee_id = common::create_user(&client, addr, "attendee").await;

    let resp = client
        .post(format!("http://{}/api/checkins", addr))
        .json(&serde_json::json!({
            "event_id": Uuid::new_v4(),
            "user_id": attendee_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn invalid_user_email_is_rejected() {
    let addr = common::setup_test_app().await;
    let client = common::http_client();

    let resp = client
        .post(format!("http://{}/api/users", addr))
        .json(&serde_json::json!({
            "name": "broken",
            "email": "not-an-email",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

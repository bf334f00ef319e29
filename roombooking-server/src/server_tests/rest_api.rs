use crate::booking::model::BookingStatus;
use crate::context::ApplicationContext;
use crate::room::model::{NewRoom, Room};
use crate::server::rest_api::models::{
	AdminResponse, BookingResponse, BookingWithRoomNameResponse, LoginResponse, MessageResponse,
	RoomAvailabilityResponse, RoomResponse,
};
use crate::server_tests::start_test_server;
use crate::server_tests::test_client::TestClient;
use crate::types::uuid::Uuid;
use chrono::{NaiveDate, TimeDelta};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize, Debug)]
struct ErrorBody {
	r#type: String,
	status: u16,
	message: String,
}

#[tokio::test]
async fn should_list_rooms_with_todays_availability() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	create_booking(&client, &room, "2025-03-14", "10:00", "11:30").await;

	let response = client.get("/api/rooms").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let rooms = response
		.json::<Vec<RoomResponse>>()
		.await
		.expect("Failed to parse rooms");

	assert_eq!(1, rooms.len());
	let availability = rooms[0].today_availability.as_ref().expect("Availability missing");
	assert_eq!(8, availability.len());
	let unavailable = availability
		.iter()
		.filter(|slot| !slot.available)
		.map(|slot| slot.time.to_string())
		.collect::<Vec<_>>();
	assert_eq!(vec!["10:00", "11:00"], unavailable);
}

#[tokio::test]
async fn should_return_rooms_as_camel_case_json() {
	let (client, context) = start_test_server().await;
	create_room(&context, "Conference Room A").await;

	let rooms = client
		.get("/api/rooms")
		.send()
		.await
		.expect("Request failed.")
		.json::<serde_json::Value>()
		.await
		.expect("Failed to parse rooms");

	let room = &rooms[0];
	assert_eq!("https://example.com/room.jpg", room["imageUrl"]);
	assert_eq!(json!(true), room["isAccessible"]);
	assert_eq!(json!(["Projector", "Whiteboard"]), room["equipment"]);
	assert_eq!(json!({"time": "09:00", "available": true}), room["todayAvailability"][0]);
}

#[tokio::test]
async fn should_get_room() {
	let (client, context) = start_test_server().await;
	let room = create_room(&context, "Study Room C").await;

	let response = client
		.get(&format!("/api/rooms/{}", room.uuid))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let room_response = response.json::<RoomResponse>().await.expect("Failed to parse room");

	assert_eq!(RoomResponse::from(room), room_response);
}

#[tokio::test]
async fn should_not_find_unknown_room() {
	let (client, _context) = start_test_server().await;

	for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
		let response = client
			.get(&format!("/api/rooms/{id}"))
			.send()
			.await
			.expect("Request failed.");
		assert_eq!(StatusCode::NOT_FOUND, response.status());
		let error = response.json::<ErrorBody>().await.expect("Failed to parse error");
		assert_eq!("room-not-found", error.r#type);
		assert_eq!(404, error.status);
		assert_eq!("Room not found", error.message);
	}
}

#[tokio::test]
async fn should_return_availability_for_requested_date() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Lecture Hall B").await;
	login(&mut client).await;
	create_booking(&client, &room, "2025-03-20", "14:00", "16:00").await;

	let response = client
		.get(&format!("/api/rooms/{}/availability?date=2025-03-20", room.uuid))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let availability = response
		.json::<RoomAvailabilityResponse>()
		.await
		.expect("Failed to parse availability");

	assert_eq!(room.uuid, availability.room_id);
	assert_eq!(NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(), availability.date);
	let unavailable = availability
		.slots
		.iter()
		.filter(|slot| !slot.available)
		.map(|slot| slot.time.to_string())
		.collect::<Vec<_>>();
	assert_eq!(vec!["14:00", "15:00"], unavailable);
}

#[tokio::test]
async fn should_default_availability_to_today() {
	let (client, context) = start_test_server().await;
	let room = create_room(&context, "Lecture Hall B").await;

	let availability = client
		.get(&format!("/api/rooms/{}/availability", room.uuid))
		.send()
		.await
		.expect("Request failed.")
		.json::<RoomAvailabilityResponse>()
		.await
		.expect("Failed to parse availability");

	assert_eq!(context.time_source.today(), availability.date);
	assert!(availability.slots.iter().all(|slot| slot.available));
}

#[tokio::test]
async fn should_reject_malformed_availability_date() {
	let (client, context) = start_test_server().await;
	let room = create_room(&context, "Lecture Hall B").await;

	let response = client
		.get(&format!("/api/rooms/{}/availability?date=tomorrow", room.uuid))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
}

#[tokio::test]
async fn should_login_with_valid_credentials() {
	let (client, _context) = start_test_server().await;

	let response = client
		.post("/api/auth/login")
		.json(&json!({"username": "admin", "password": "password"}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let login = response.json::<LoginResponse>().await.expect("Failed to parse login");

	assert_eq!("admin", login.username);
	assert!(!login.token.is_empty());
}

#[tokio::test]
async fn should_reject_invalid_credentials() {
	let (client, _context) = start_test_server().await;

	let response = client
		.post("/api/auth/login")
		.json(&json!({"username": "admin", "password": "wrong"}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error");

	assert_eq!("Invalid credentials", error.message);
}

#[tokio::test]
async fn should_reject_login_without_password() {
	let (client, _context) = start_test_server().await;

	for body in [json!({"username": "admin"}), json!({"username": "admin", "password": ""})] {
		let response = client
			.post("/api/auth/login")
			.json(&body)
			.send()
			.await
			.expect("Request failed.");
		assert_eq!(StatusCode::BAD_REQUEST, response.status());
	}
}

#[tokio::test]
async fn should_return_current_admin() {
	let (mut client, _context) = start_test_server().await;
	let login = login(&mut client).await;

	let admin = client
		.get("/api/auth/user")
		.send()
		.await
		.expect("Request failed.")
		.json::<AdminResponse>()
		.await
		.expect("Failed to parse admin");

	assert_eq!(
		AdminResponse {
			id: login.id,
			username: "admin".to_string(),
		},
		admin
	);
}

#[tokio::test]
async fn should_logout() {
	let (client, _context) = start_test_server().await;

	let response = client.post("/api/auth/logout").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let message = response.json::<MessageResponse>().await.expect("Failed to parse message");

	assert_eq!("Logged out successfully", message.message);
}

#[tokio::test]
async fn should_require_authentication_for_bookings() {
	let (mut client, _context) = start_test_server().await;

	let response = client.get("/api/bookings").send().await.expect("Request failed.");
	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error");
	assert_eq!("Unauthorized", error.message);

	client.authenticate("garbage");
	let response = client.get("/api/bookings").send().await.expect("Request failed.");
	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn should_reject_expired_token() {
	let (mut client, context) = start_test_server().await;
	login(&mut client).await;

	context.time_source.advance_time(TimeDelta::hours(3));
	let response = client.get("/api/bookings").send().await.expect("Request failed.");

	assert_eq!(StatusCode::UNAUTHORIZED, response.status());
}

#[tokio::test]
async fn should_create_and_list_booking() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;

	let booking = create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;
	assert_eq!(BookingStatus::Confirmed, booking.status);
	assert_eq!("Dr. Smith", booking.user_name);

	let bookings = list_bookings(&client).await;
	assert_eq!(
		vec![BookingWithRoomNameResponse {
			booking,
			room_name: "Conference Room A".to_string(),
		}],
		bookings
	);
}

#[tokio::test]
async fn should_reject_conflicting_booking() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;

	let response = client
		.post("/api/bookings")
		.json(&booking_body(&room, "2025-03-14", "09:30", "10:30"))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CONFLICT, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error");

	assert_eq!("Time slot is already booked", error.message);
	assert_eq!(1, list_bookings(&client).await.len());
}

#[tokio::test]
async fn should_allow_back_to_back_bookings() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;

	create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;
	create_booking(&client, &room, "2025-03-14", "10:00", "11:00").await;

	assert_eq!(2, list_bookings(&client).await.len());
}

#[tokio::test]
async fn should_reject_invalid_booking_requests() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;

	let bodies = [
		booking_body(&room, "2025-03-14", "11:00", "10:00"),
		booking_body(&room, "2025-03-14", "10:00", "10:00"),
		booking_body(&room, "2025-03-14", "9:00", "10:00"),
		booking_body(&room, "14.03.2025", "09:00", "10:00"),
		json!({"roomId": Uuid::new_v4(), "date": "2025-03-14", "startTime": "09:00", "endTime": "10:00"}),
		json!({"date": "2025-03-14", "startTime": "09:00", "endTime": "10:00"}),
	];
	for body in bodies {
		let response = client
			.post("/api/bookings")
			.json(&body)
			.send()
			.await
			.expect("Request failed.");
		assert_eq!(StatusCode::BAD_REQUEST, response.status(), "{body}");
	}

	assert!(list_bookings(&client).await.is_empty());
}

#[tokio::test]
async fn should_require_user_name_for_new_booking() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;

	let response = client
		.post("/api/bookings")
		.json(&json!({
			"roomId": room.uuid,
			"date": "2025-03-14",
			"startTime": "09:00",
			"endTime": "10:00",
		}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::BAD_REQUEST, response.status());
	assert!(list_bookings(&client).await.is_empty());
}

#[tokio::test]
async fn should_clear_purpose_with_null() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	let booking = create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;

	let untouched = client
		.patch(&format!("/api/bookings/{}", booking.id))
		.json(&json!({"userName": "Prof. Johnson"}))
		.send()
		.await
		.expect("Request failed.")
		.json::<BookingResponse>()
		.await
		.expect("Failed to parse booking");
	assert_eq!(Some("Faculty meeting".to_string()), untouched.purpose);
	assert_eq!("Prof. Johnson", untouched.user_name);

	let cleared = client
		.patch(&format!("/api/bookings/{}", booking.id))
		.json(&json!({"purpose": null}))
		.send()
		.await
		.expect("Request failed.")
		.json::<BookingResponse>()
		.await
		.expect("Failed to parse booking");
	assert_eq!(None, cleared.purpose);
	assert_eq!("Prof. Johnson", cleared.user_name);
}

#[tokio::test]
async fn should_update_booking_status() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	let booking = create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;

	let response = client
		.patch(&format!("/api/bookings/{}", booking.id))
		.json(&json!({"status": "completed"}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let updated = response.json::<BookingResponse>().await.expect("Failed to parse booking");

	assert_eq!(
		BookingResponse {
			status: BookingStatus::Completed,
			..booking
		},
		updated
	);
	create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;
}

#[tokio::test]
async fn should_reject_update_into_occupied_slot() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;
	let later = create_booking(&client, &room, "2025-03-14", "13:00", "14:00").await;

	let response = client
		.patch(&format!("/api/bookings/{}", later.id))
		.json(&json!({"startTime": "09:30", "endTime": "10:30"}))
		.send()
		.await
		.expect("Request failed.");

	assert_eq!(StatusCode::CONFLICT, response.status());
}

#[tokio::test]
async fn should_not_update_unknown_booking() {
	let (mut client, _context) = start_test_server().await;
	login(&mut client).await;

	let response = client
		.patch(&format!("/api/bookings/{}", Uuid::new_v4()))
		.json(&json!({"status": "cancelled"}))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::NOT_FOUND, response.status());
	let error = response.json::<ErrorBody>().await.expect("Failed to parse error");

	assert_eq!("Booking not found", error.message);
}

#[tokio::test]
async fn should_delete_booking() {
	let (mut client, context) = start_test_server().await;
	let room = create_room(&context, "Conference Room A").await;
	login(&mut client).await;
	let booking = create_booking(&client, &room, "2025-03-14", "09:00", "10:00").await;

	let response = client
		.delete(&format!("/api/bookings/{}", booking.id))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	let message = response.json::<MessageResponse>().await.expect("Failed to parse message");
	assert_eq!("Booking deleted successfully", message.message);
	assert!(list_bookings(&client).await.is_empty());

	let response = client
		.delete(&format!("/api/bookings/{}", booking.id))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::NOT_FOUND, response.status());
}

async fn create_room(context: &ApplicationContext, name: &str) -> Room {
	let mut connection = context.database.connection().await.expect("Failed to get connection");
	context
		.repository
		.room()
		.create(
			&mut *connection,
			&NewRoom::builder()
				.name(name)
				.building("Science Center")
				.floor("Floor 3")
				.capacity(12)
				.image_url("https://example.com/room.jpg")
				.equipment(vec!["Projector".to_string(), "Whiteboard".to_string()])
				.is_accessible(true)
				.description("Room for testing")
				.build(),
			context.time_source.now(),
		)
		.await
		.expect("Failed to create room")
}

async fn login(client: &mut TestClient) -> LoginResponse {
	let login = client
		.post("/api/auth/login")
		.json(&json!({"username": "admin", "password": "password"}))
		.send()
		.await
		.expect("Request failed.")
		.json::<LoginResponse>()
		.await
		.expect("Failed to parse login");
	client.authenticate(login.token.clone());
	login
}

fn booking_body(room: &Room, date: &str, start_time: &str, end_time: &str) -> serde_json::Value {
	json!({
		"roomId": room.uuid,
		"userName": "Dr. Smith",
		"date": date,
		"startTime": start_time,
		"endTime": end_time,
		"purpose": "Faculty meeting",
	})
}

async fn create_booking(client: &TestClient, room: &Room, date: &str, start_time: &str, end_time: &str) -> BookingResponse {
	let response = client
		.post("/api/bookings")
		.json(&booking_body(room, date, start_time, end_time))
		.send()
		.await
		.expect("Request failed.");
	assert_eq!(StatusCode::CREATED, response.status());
	response.json::<BookingResponse>().await.expect("Failed to parse booking")
}

async fn list_bookings(client: &TestClient) -> Vec<BookingWithRoomNameResponse> {
	let response = client.get("/api/bookings").send().await.expect("Request failed.");
	assert_eq!(StatusCode::OK, response.status());
	response
		.json::<Vec<BookingWithRoomNameResponse>>()
		.await
		.expect("Failed to parse bookings")
}

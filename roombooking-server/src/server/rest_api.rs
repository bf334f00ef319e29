use crate::admin::AdminService;
use crate::admin::model::Admin;
use crate::booking::{BookingError, BookingService};
use crate::context::ApplicationContext;
use crate::room::{RoomLookupError, RoomService};
use crate::server::rest_api::auth::TokenKeys;
use crate::server::rest_api::error::ApiErrorResponse;
use crate::server::rest_api::error::login::LoginError;
use crate::server::rest_api::models::{
	AdminResponse, AvailabilityQuery, BookingResponse, BookingWithRoomNameResponse, CreateBookingRequest,
	LoginRequest, LoginResponse, MessageResponse, RoomAvailabilityResponse, RoomResponse, UpdateBookingRequest,
};
use crate::server::rest_api::response::Created;
use crate::types::uuid::Uuid;
use crate::utils::time_source::TimeSource;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch, post};
use axum::{Extension, Json, Router, middleware};
use tracing::info;

pub mod auth;
pub mod error;
pub mod models;
pub mod response;

pub fn rest_api(application_context: ApplicationContext) -> Router<ApplicationContext> {
	let authenticated = Router::new()
		.route("/bookings", get(list_bookings).post(create_booking))
		.route("/bookings/{id}", patch(update_booking).delete(delete_booking))
		.route("/auth/user", get(current_admin))
		.route_layer(middleware::from_fn_with_state(application_context, auth::middleware));

	Router::new()
		.route("/rooms", get(list_rooms))
		.route("/rooms/{id}", get(get_room))
		.route("/rooms/{id}/availability", get(room_availability))
		.route("/auth/login", post(login))
		.route("/auth/logout", post(logout))
		.merge(authenticated)
}

/// Ids that aren't UUIDs can't belong to any record.
fn parse_id<E>(id: &str, not_found: E) -> Result<Uuid, E> {
	id.parse().map_err(|_| not_found)
}

async fn list_rooms(State(rooms): State<RoomService>) -> Result<Json<Vec<RoomResponse>>, ApiErrorResponse> {
	let rooms = rooms.list_with_today_availability().await?;
	Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

async fn get_room(State(rooms): State<RoomService>, Path(id): Path<String>) -> Result<Json<RoomResponse>, ApiErrorResponse> {
	let room_uuid = parse_id(&id, RoomLookupError::NotFound)?;
	let room = rooms.get(room_uuid).await?;
	Ok(Json(room.into()))
}

async fn room_availability(
	State(rooms): State<RoomService>,
	Path(id): Path<String>,
	query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<RoomAvailabilityResponse>, ApiErrorResponse> {
	let room_uuid = parse_id(&id, RoomLookupError::NotFound)?;
	let Query(AvailabilityQuery { date }) = query?;

	let (date, slots) = rooms.availability(room_uuid, date).await?;
	Ok(Json(RoomAvailabilityResponse {
		room_id: room_uuid,
		date,
		slots: slots.into_iter().map(Into::into).collect(),
	}))
}

async fn list_bookings(
	State(bookings): State<BookingService>,
) -> Result<Json<Vec<BookingWithRoomNameResponse>>, ApiErrorResponse> {
	let bookings = bookings.list().await?;
	Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

async fn create_booking(
	State(bookings): State<BookingService>,
	request: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Created<BookingResponse>, ApiErrorResponse> {
	let Json(request) = request?;
	let booking = bookings.create(request.into()).await?;
	Ok(Created(booking.into()))
}

async fn update_booking(
	State(bookings): State<BookingService>,
	Path(id): Path<String>,
	request: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> Result<Json<BookingResponse>, ApiErrorResponse> {
	let booking_uuid = parse_id(&id, BookingError::NotFound)?;
	let Json(request) = request?;
	let booking = bookings.update(booking_uuid, request.into()).await?;
	Ok(Json(booking.into()))
}

async fn delete_booking(
	State(bookings): State<BookingService>,
	Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
	let booking_uuid = parse_id(&id, BookingError::NotFound)?;
	bookings.remove(booking_uuid).await?;
	Ok(Json(MessageResponse::new("Booking deleted successfully")))
}

async fn login(
	State(admins): State<AdminService>,
	State(token_keys): State<TokenKeys>,
	State(time_source): State<TimeSource>,
	request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiErrorResponse> {
	let Json(LoginRequest { username, password }) = request.map_err(|_| LoginError::MissingCredentials)?;
	if username.is_empty() || password.is_empty() {
		return Err(LoginError::MissingCredentials.into());
	}

	let admin = admins
		.authenticate(&username, &password)
		.await
		.map_err(LoginError::from)?
		.ok_or(LoginError::InvalidCredentials)?;
	let token = token_keys.issue(&admin, time_source.now()).map_err(LoginError::from)?;

	info!("Admin '{}' logged in", admin.username);
	Ok(Json(LoginResponse {
		id: admin.uuid,
		username: admin.username,
		token,
	}))
}

async fn logout() -> Json<MessageResponse> {
	Json(MessageResponse::new("Logged out successfully"))
}

async fn current_admin(Extension(admin): Extension<Admin>) -> Json<AdminResponse> {
	Json(admin.into())
}

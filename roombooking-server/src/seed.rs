use crate::booking::model::{BookingStatus, NewBooking};
use crate::context::ApplicationContext;
use crate::database::error::DatabaseError;
use crate::room::model::{NewRoom, Room};
use crate::types::time_of_day::TimeOfDay;
use tracing::info;

struct SampleRoom {
	name: &'static str,
	building: &'static str,
	floor: &'static str,
	capacity: i64,
	image_url: &'static str,
	equipment: &'static [&'static str],
	description: &'static str,
}

const SAMPLE_ROOMS: [SampleRoom; 6] = [
	SampleRoom {
		name: "Conference Room A",
		building: "Science Center",
		floor: "Floor 3",
		capacity: 12,
		image_url: "https://images.unsplash.com/photo-1556761175-b413da4baf72?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["65\" Display", "Video Conf", "Whiteboard"],
		description: "Modern conference room with state-of-the-art AV equipment",
	},
	SampleRoom {
		name: "Lecture Hall B",
		building: "Science Center",
		floor: "Floor 1",
		capacity: 50,
		image_url: "https://images.unsplash.com/photo-1497366216548-37526070297c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["Projector", "Audio System", "Computer"],
		description: "Large lecture hall with tiered seating",
	},
	SampleRoom {
		name: "Study Room C",
		building: "Library",
		floor: "Floor 2",
		capacity: 6,
		image_url: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["32\" Display", "Whiteboard"],
		description: "Intimate study space for small groups",
	},
	SampleRoom {
		name: "Executive Room D",
		building: "Administration Building",
		floor: "Floor 5",
		capacity: 8,
		image_url: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["75\" Display", "Video Conf", "Smart Board", "Computer"],
		description: "Premium executive meeting space",
	},
	SampleRoom {
		name: "Collaboration Space E",
		building: "Student Union",
		floor: "Floor 2",
		capacity: 15,
		image_url: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["Whiteboards", "High-speed WiFi", "Power Outlets"],
		description: "Flexible collaboration space for group work",
	},
	SampleRoom {
		name: "Computer Lab F",
		building: "Engineering Building",
		floor: "Floor 1",
		capacity: 25,
		image_url: "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400",
		equipment: &["25 Computers", "Projector", "Printer"],
		description: "Fully equipped computer laboratory",
	},
];

/// (room index, booked for, start hour, end hour, purpose, status)
const SAMPLE_BOOKINGS: [(usize, &str, u8, u8, &str, BookingStatus); 3] = [
	(0, "Dr. Smith", 11, 12, "Faculty meeting", BookingStatus::Confirmed),
	(2, "John Davis", 9, 11, "Study group session", BookingStatus::Confirmed),
	(1, "Prof. Johnson", 9, 10, "Physics lecture", BookingStatus::Completed),
];

/// Creates the configured admin and, if enabled and the database has no rooms yet, sample rooms and bookings.
pub async fn seed_database(context: &ApplicationContext) -> Result<(), DatabaseError> {
	let admin = &context.configuration.admin;
	context.admins.ensure_exists(&admin.username, &admin.password).await?;

	if !context.configuration.seed_sample_data {
		return Ok(());
	}

	let mut connection = context.database.connection().await?;
	let repository = &context.repository;
	if !repository.room().list(&mut *connection).await?.is_empty() {
		info!("Rooms already exist, not seeding sample data");
		return Ok(());
	}

	let now = context.time_source.now();
	let mut rooms: Vec<Room> = Vec::with_capacity(SAMPLE_ROOMS.len());
	for sample in &SAMPLE_ROOMS {
		let new_room = NewRoom::builder()
			.name(sample.name)
			.building(sample.building)
			.floor(sample.floor)
			.capacity(sample.capacity)
			.image_url(sample.image_url)
			.equipment(sample.equipment.iter().map(ToString::to_string).collect::<Vec<_>>())
			.is_accessible(true)
			.description(sample.description)
			.build();
		rooms.push(repository.room().create(&mut *connection, &new_room, now).await?);
	}

	let today = context.time_source.today();
	for (room_index, user_name, start_hour, end_hour, purpose, status) in SAMPLE_BOOKINGS {
		let new_booking = NewBooking {
			room_uuid: rooms[room_index].uuid,
			user_name: user_name.to_string(),
			date: today,
			start_time: TimeOfDay::on_the_hour(start_hour),
			end_time: TimeOfDay::on_the_hour(end_hour),
			purpose: Some(purpose.to_string()),
			status,
			created_at: now,
		};
		repository.booking().create(&mut *connection, &new_booking).await?;
	}

	info!(
		rooms = SAMPLE_ROOMS.len(),
		bookings = SAMPLE_BOOKINGS.len(),
		"Seeded sample data"
	);
	Ok(())
}

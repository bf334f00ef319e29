//! Booking conflict detection and the hourly availability grid.
//!
//! Everything in here is pure: callers fetch the bookings and decide what a
//! conflict means for them.

use crate::booking::model::{Booking, BookingStatus};
use crate::types::time_of_day::TimeOfDay;
use crate::types::uuid::Uuid;
use chrono::NaiveDate;

/// Hour of the first slot shown in the daily grid.
pub const FIRST_SLOT_HOUR: u8 = 9;
/// Hour of the last slot shown in the daily grid, the slot ends an hour later.
pub const LAST_SLOT_HOUR: u8 = 16;

/// Half-open range `[start, end)` of a single day, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
	start: TimeOfDay,
	end: TimeOfDay,
}

impl TimeRange {
	/// Returns `None` unless `start < end`.
	pub fn new(start: TimeOfDay, end: TimeOfDay) -> Option<Self> {
		(start < end).then_some(Self { start, end })
	}

	pub fn start(self) -> TimeOfDay {
		self.start
	}

	pub fn end(self) -> TimeOfDay {
		self.end
	}

	/// Ranges that merely touch (one ends when the other starts) don't overlap.
	pub fn overlaps(self, other: TimeRange) -> bool {
		self.start < other.end && other.start < self.end
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
	pub time: TimeOfDay,
	pub available: bool,
}

impl Booking {
	pub fn time_range(&self) -> TimeRange {
		TimeRange {
			start: self.start_time,
			end: self.end_time,
		}
	}

	/// Whether this booking keeps others from using `room_uuid` on `date`.
	fn blocks(&self, room_uuid: Uuid, date: NaiveDate) -> bool {
		self.room_uuid == room_uuid && self.date == date && self.status == BookingStatus::Confirmed
	}
}

/// Checks `requested` against every confirmed booking of the same room on the same date.
pub fn is_available(room_uuid: Uuid, date: NaiveDate, requested: TimeRange, existing_bookings: &[Booking]) -> bool {
	!existing_bookings
		.iter()
		.filter(|booking| booking.blocks(room_uuid, date))
		.any(|booking| booking.time_range().overlaps(requested))
}

/// One slot per full hour from 09:00 up to and including 16:00.
pub fn daily_availability(room_uuid: Uuid, date: NaiveDate, existing_bookings: &[Booking]) -> Vec<TimeSlot> {
	(FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
		.map(|hour| {
			let slot = TimeRange {
				start: TimeOfDay::on_the_hour(hour),
				end: TimeOfDay::on_the_hour(hour + 1),
			};
			TimeSlot {
				time: slot.start,
				available: is_available(room_uuid, date, slot, existing_bookings),
			}
		})
		.collect()
}

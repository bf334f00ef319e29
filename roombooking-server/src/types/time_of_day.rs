use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Wall clock time with minute precision, written as zero-padded 24-hour `HH:MM`.
///
/// The ordering is chronological and coincides with the lexicographic ordering of the
/// textual form, which is what the database relies on when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
	hour: u8,
	minute: u8,
}

impl TimeOfDay {
	pub fn new(hour: u8, minute: u8) -> Result<Self, TimeOfDayError> {
		if hour > 23 {
			return Err(TimeOfDayError::HourOutOfRange);
		}
		if minute > 59 {
			return Err(TimeOfDayError::MinuteOutOfRange);
		}

		Ok(Self { hour, minute })
	}

	/// Full hour, callers must guarantee `hour < 24`.
	pub(crate) const fn on_the_hour(hour: u8) -> Self {
		debug_assert!(hour < 24);
		Self { hour, minute: 0 }
	}

	pub fn hour(self) -> u8 {
		self.hour
	}

	pub fn minute(self) -> u8 {
		self.minute
	}
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeOfDayError {
	#[error("Time must have the format HH:MM.")]
	InvalidFormat,
	#[error("Hour must be between 00 and 23.")]
	HourOutOfRange,
	#[error("Minute must be between 00 and 59.")]
	MinuteOutOfRange,
}

/// Only exact `HH:MM` is accepted. `NaiveTime::parse_from_str` with `%H:%M` also takes `9:00`, which would break
/// the text ordering of stored times.
impl FromStr for TimeOfDay {
	type Err = TimeOfDayError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let bytes = text.as_bytes();
		let &[hour_tens, hour_ones, b':', minute_tens, minute_ones] = bytes else {
			return Err(TimeOfDayError::InvalidFormat);
		};

		let digit = |byte: u8| {
			if byte.is_ascii_digit() {
				Ok(byte - b'0')
			} else {
				Err(TimeOfDayError::InvalidFormat)
			}
		};

		let hour = digit(hour_tens)? * 10 + digit(hour_ones)?;
		let minute = digit(minute_tens)? * 10 + digit(minute_ones)?;
		Self::new(hour, minute)
	}
}

impl Display for TimeOfDay {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "{:02}:{:02}", self.hour, self.minute)
	}
}

impl Serialize for TimeOfDay {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for TimeOfDay {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let string = String::deserialize(deserializer)?;
		TimeOfDay::from_str(&string).map_err(serde::de::Error::custom)
	}
}

impl<'r, Db> Decode<'r, Db> for TimeOfDay
where
	Db: Database,
	String: Decode<'r, Db>,
{
	fn decode(value: <Db as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
		let text = String::decode(value)?;
		Ok(text.parse()?)
	}
}

impl<'q, Db> Encode<'q, Db> for TimeOfDay
where
	Db: Database,
	String: Encode<'q, Db>,
{
	fn encode_by_ref(&self, buffer: &mut <Db as Database>::ArgumentBuffer<'q>) -> Result<IsNull, BoxDynError> {
		self.to_string().encode_by_ref(buffer)
	}
}

impl<Db> sqlx::Type<Db> for TimeOfDay
where
	Db: Database,
	String: sqlx::Type<Db>,
{
	fn type_info() -> Db::TypeInfo {
		String::type_info()
	}

	fn compatible(type_info: &Db::TypeInfo) -> bool {
		String::compatible(type_info)
	}
}

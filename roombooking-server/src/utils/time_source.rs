use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current time.
///
/// Defaults to the system clock, tests can substitute a fixed clock that only moves when told to.
#[derive(Clone, Default)]
pub struct TimeSource {
	test_time: Option<Arc<Mutex<DateTime<Utc>>>>,
}

impl TimeSource {
	#[cfg(test)]
	pub fn test(start: DateTime<Utc>) -> Self {
		Self {
			test_time: Some(Arc::new(Mutex::new(start))),
		}
	}

	pub fn now(&self) -> DateTime<Utc> {
		match &self.test_time {
			None => Utc::now(),
			Some(test_time) => *test_time.lock(),
		}
	}

	/// The current calendar date in UTC.
	pub fn today(&self) -> NaiveDate {
		self.now().date_naive()
	}

	#[cfg(test)]
	pub fn advance_time(&self, by: chrono::TimeDelta) {
		let mut test_time = self
			.test_time
			.as_ref()
			.expect("Can only be called in test mode.")
			.lock();
		*test_time += by;
	}
}

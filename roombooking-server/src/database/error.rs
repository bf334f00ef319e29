use derive_more::Display;
use sqlx::error::ErrorKind;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Failure of a repository operation, independent of the backend that produced it.
#[derive(Debug, Error)]
pub enum DatabaseError {
	#[error("Record not found")]
	NotFound(#[source] anyhow::Error),
	#[error("Database unavailable: {0}")]
	Unavailable(anyhow::Error),
	#[error("Violated {constraint} constraint: {source}")]
	ConstraintViolation {
		constraint: Constraint,
		source: anyhow::Error,
	},
	#[error("Stored value doesn't fit the model: {0}")]
	Conversion(anyhow::Error),
	#[error("Failed to migrate schema: {0}")]
	Migration(anyhow::Error),
	#[error("Repository and connection are for different databases: {0}")]
	DatabaseMismatch(anyhow::Error),
	#[error("Query failed: {0}")]
	Query(anyhow::Error),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
	#[display("unique")]
	Unique,
	#[display("foreign key")]
	ForeignKey,
	#[display("not null")]
	NotNull,
	#[display("check")]
	Check,
}

impl From<sqlx::Error> for DatabaseError {
	fn from(error: sqlx::Error) -> Self {
		use sqlx::Error::*;
		match error {
			Database(error) => error.into(),
			RowNotFound => Self::NotFound(error.into()),
			Encode(_) | Decode(_) | ColumnDecode { .. } => Self::Conversion(error.into()),
			PoolTimedOut | PoolClosed | Io(_) | Tls(_) | Configuration(_) => Self::Unavailable(error.into()),
			Migrate(error) => (*error).into(),
			other => Self::Query(other.into()),
		}
	}
}

impl From<Box<dyn sqlx::error::DatabaseError>> for DatabaseError {
	fn from(error: Box<dyn sqlx::error::DatabaseError>) -> Self {
		let constraint = match error.kind() {
			ErrorKind::UniqueViolation => Some(Constraint::Unique),
			ErrorKind::ForeignKeyViolation => Some(Constraint::ForeignKey),
			ErrorKind::NotNullViolation => Some(Constraint::NotNull),
			ErrorKind::CheckViolation => Some(Constraint::Check),
			_ => None,
		};

		let source = anyhow::Error::from(sqlx::Error::Database(error));
		match constraint {
			Some(constraint) => Self::ConstraintViolation { constraint, source },
			None => Self::Query(source),
		}
	}
}

impl From<MigrateError> for DatabaseError {
	fn from(error: MigrateError) -> Self {
		Self::Migration(error.into())
	}
}

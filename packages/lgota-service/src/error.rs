pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("User context not found for {user_id:?}.")]
	UserContextNotFound { user_id: Option<String> },
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<lgota_storage::Error> for Error {
	fn from(err: lgota_storage::Error) -> Self {
		match err {
			lgota_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
		}
	}
}


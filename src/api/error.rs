use thiserror::Error;

/// Failure of one analysis request.
///
/// Kept `Clone` so it can sit inside reactive state. Views never show the
/// details; they show [`FetchError::USER_MESSAGE`] and the details go to the
/// console log.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FetchError {
	/// The request never produced a response.
	#[error("request to {url} failed: {message}")]
	Network {
		/// Requested URL.
		url: String,
		/// Transport error text.
		message: String,
	},

	/// The server answered with a non-2xx status.
	#[error("{url} answered with HTTP {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},

	/// The body was not the expected JSON shape.
	#[error("could not decode response from {url}: {message}")]
	Decode {
		/// Requested URL.
		url: String,
		/// Decoder error text.
		message: String,
	},
}

impl FetchError {
	/// The only failure text a view displays.
	pub const USER_MESSAGE: &'static str = "Failed to load data.";

	/// URL of the request that failed.
	pub fn url(&self) -> &str {
		match self {
			Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
		}
	}
}

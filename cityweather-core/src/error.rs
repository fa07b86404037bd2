use thiserror::Error;

/// Why a weather lookup failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider answered with an error status, e.g. an unknown city.
    #[error("provider rejected the request ({status}): {message}")]
    ProviderRejected { status: u16, message: String },

    /// The request went out but no response came back.
    #[error("no response from provider: {0}")]
    Unreachable(String),

    /// The request could not be built or sent, or the response made no sense.
    #[error("invalid request: {0}")]
    RequestInvalid(String),
}

impl FetchError {
    /// Text shown to the user when a lookup fails.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::ProviderRejected { message, .. } => {
                format!("Error fetching weather data: {message}")
            }
            FetchError::Unreachable(_) => {
                "Failed to fetch data. Please check your internet connection.".to_string()
            }
            FetchError::RequestInvalid(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the API key in its query string.
        let err = err.without_url();
        if err.is_builder() {
            FetchError::RequestInvalid(err.to_string())
        } else if err.is_decode() {
            FetchError::RequestInvalid(format!("malformed provider response: {err}"))
        } else {
            FetchError::Unreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_is_shown_verbatim() {
        let err = FetchError::ProviderRejected { status: 404, message: "city not found".into() };
        assert_eq!(err.user_message(), "Error fetching weather data: city not found");
    }

    #[test]
    fn transport_failures_get_generic_messages() {
        let unreachable = FetchError::Unreachable("connection refused".into());
        assert!(unreachable.user_message().contains("check your internet connection"));

        let invalid = FetchError::RequestInvalid("relative URL without a base".into());
        assert_eq!(invalid.user_message(), "An unexpected error occurred.");
    }
}

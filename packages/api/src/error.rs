use thiserror::Error;

/// Failure of a [`SocialApi`](crate::SocialApi) call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected by the server.
    #[error("{0}")]
    Auth(String),
    /// Registration rejected by the server.
    #[error("{0}")]
    Validation(String),
    /// Post creation rejected by the server.
    #[error("{0}")]
    Submission(String),
    /// Post content was empty; no request was sent.
    #[error("post content must not be empty")]
    EmptyContent,
    /// The HTTP exchange did not complete, or its body could not be decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The message to show in the form that initiated the request.
    ///
    /// `None` when there is no server message: transport failures, and empty
    /// content, which the feed ignores without a request.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Auth(msg) | ApiError::Validation(msg) | ApiError::Submission(msg) => {
                Some(msg)
            }
            ApiError::EmptyContent | ApiError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

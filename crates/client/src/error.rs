use buildnote_core::decode::DecodeError;

/// Errors from the REST access layer.
///
/// The original client collapsed every failure into an empty list; these
/// variants keep transport failures, server-side rejections, and corrupt
/// payloads apart so screens can surface them differently.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (connect, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("backend error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not decodable JSON.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The response decoded, but did not contain the expected object.
    #[error("response body did not contain a decodable {0} object")]
    UnexpectedShape(&'static str),
}

//! HTTP status classification for conformance checks.

/// An HTTP status code carried alongside a response body.
///
/// Stored as the raw code so scenarios can compare against exact expected
/// values instead of re-deriving them from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// The two codes the service contract is written in terms of.
    pub const OK: HttpStatusCode = HttpStatusCode(200);
    pub const FORBIDDEN: HttpStatusCode = HttpStatusCode(403);

    /// 2xx success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// The rejection code the service uses for bad credentials, bad keys
    /// and bad payloads alike.
    pub fn is_forbidden(&self) -> bool {
        self.0 == 403
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl PartialEq<u16> for HttpStatusCode {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

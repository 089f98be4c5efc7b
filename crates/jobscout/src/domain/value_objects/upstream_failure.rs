//! UpstreamFailure - Raw failure conditions fed to the classifier

/// A transport-level fault, raised before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFault {
    /// The request exceeded its deadline.
    Timeout,
    /// DNS lookup failed or the host could not be routed to.
    HostUnreachable(String),
    ConnectionRefused(String),
    Other(String),
}

/// Everything that can go wrong with a single upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    /// The upstream answered with a non-success status.
    Status { status: u16, body: String },
    Transport(TransportFault),
    /// A success status whose body is missing the `results` field or is not JSON.
    MalformedBody(String),
}

impl UpstreamFailure {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

impl From<TransportFault> for UpstreamFailure {
    fn from(fault: TransportFault) -> Self {
        Self::Transport(fault)
    }
}

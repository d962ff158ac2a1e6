use std::fmt::{Display, Formatter};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to fetch the generation mix from the upstream provider")]
    UpstreamUnavailable(#[source] BoxedError),

    #[error("no feasible window of {window_size} intervals among {n_intervals} available")]
    NoFeasibleWindow { window_size: usize, n_intervals: usize },

    #[error("duration must be a positive number of hours, got {duration_hours}")]
    InvalidDuration { duration_hours: u32 },

    #[error("window must contain at least one interval")]
    InvalidWindowSize,
}

impl AnalysisError {
    pub fn upstream(error: impl Into<BoxedError>) -> Self {
        Self::UpstreamUnavailable(error.into())
    }

    /// HTTP status class a transport layer would report this error with.
    #[must_use]
    pub const fn status_class(&self) -> StatusClass {
        match self {
            Self::UpstreamUnavailable(_) => StatusClass::BadGateway,
            Self::NoFeasibleWindow { .. } => StatusClass::NotFound,
            Self::InvalidDuration { .. } | Self::InvalidWindowSize => StatusClass::BadRequest,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StatusClass {
    BadRequest,
    NotFound,
    BadGateway,
}

impl StatusClass {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::BadGateway => 502,
        }
    }
}

impl Display for StatusClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad request"),
            Self::NotFound => write!(f, "not found"),
            Self::BadGateway => write!(f, "bad gateway"),
        }
    }
}

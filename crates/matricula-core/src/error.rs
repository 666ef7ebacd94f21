//! Error types shared across the Matricula crates.

/// Errors that can occur while registering, looking up, or notifying
/// an enrollee.
///
/// The enum is `#[non_exhaustive]` so new failure kinds can be added
/// without breaking downstream crates.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A registration was rejected before any I/O because required
    /// fields were missing or empty.
    #[error("invalid registration: {message}")]
    InvalidRecord {
        /// Field that failed validation, when one can be named.
        field: Option<String>,
        /// What was missing or wrong.
        message: String,
    },

    /// The (id document, schedule) pair already exists in the ledger.
    #[error("id document {id_document} is already registered for {schedule}")]
    DuplicateRegistration {
        /// Id document of the rejected registration.
        id_document: String,
        /// Schedule slot that collided.
        schedule: String,
    },

    /// A stored row holds data that cannot be decoded. This is corrupt
    /// backing-store data, not an absent value.
    #[error("malformed record in column {column}: {message}")]
    MalformedRecord {
        /// Spreadsheet column letter the bad cell lives in.
        column: String,
        /// Why the cell could not be decoded.
        message: String,
    },

    /// A read or write against the grid backend failed. The registration
    /// is considered not saved; callers may retry from scratch.
    #[error("grid persistence failed: {message}")]
    Persistence {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying transport error, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The registration was persisted but the confirmation could not be
    /// delivered. Distinct from [`Error::Persistence`] so callers can
    /// report "saved but unconfirmed" instead of a full failure.
    #[error("confirmation notification failed: {message}")]
    Notification {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying transport error, when available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A named resource (e.g. a course row) does not exist.
    #[error("{what} not found")]
    NotFound {
        /// What was looked up.
        what: String,
    },

    /// Service configuration is unusable (bad credentials file, bad
    /// endpoint URL).
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// JSON serialization/deserialization error from an adapter wire
    /// format.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` alias used throughout the Matricula crates.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the failed operation could succeed.
    ///
    /// Only grid transport failures are transient. Notification failures
    /// are reported but never retried by the core, and the remaining
    /// kinds are permanent for a given input.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Persistence { .. } => true,
            Error::InvalidRecord { .. } => false,
            Error::DuplicateRegistration { .. } => false,
            Error::MalformedRecord { .. } => false,
            Error::Notification { .. } => false,
            Error::NotFound { .. } => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates an [`Error::InvalidRecord`] without a field name.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Error::InvalidRecord {
            field: None,
            message: message.into(),
        }
    }

    /// Creates an [`Error::InvalidRecord`] naming the offending field.
    pub fn invalid_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::InvalidRecord {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates an [`Error::DuplicateRegistration`].
    pub fn duplicate<I, S>(id_document: I, schedule: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        Error::DuplicateRegistration {
            id_document: id_document.into(),
            schedule: schedule.into(),
        }
    }

    /// Creates an [`Error::MalformedRecord`] for the given column letter.
    pub fn malformed<C, M>(column: C, message: M) -> Self
    where
        C: Into<String>,
        M: Into<String>,
    {
        Error::MalformedRecord {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Creates an [`Error::Persistence`] with a message only.
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Error::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an [`Error::Persistence`] wrapping a transport error.
    pub fn persistence_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an [`Error::Notification`] with a message only.
    pub fn notification<S: Into<String>>(message: S) -> Self {
        Error::Notification {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an [`Error::Notification`] wrapping a transport error.
    pub fn notification_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Notification {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an [`Error::NotFound`].
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound { what: what.into() }
    }

    /// Creates an [`Error::Config`].
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

/// Convenience result type used across gridreveal.
pub type GridResult<T> = Result<T, GridError>;

/// Top-level error taxonomy used by the grid APIs.
///
/// Re-entrant or wrong-view triggers are not errors; they are reported as
/// [`Outcome::Ignored`](crate::Outcome::Ignored).
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    /// Invalid user-provided configuration or fixture data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Expected markup is missing at the point it is first used.
    #[error("markup error: {0}")]
    Markup(String),

    /// A computed transform or transform-origin string could not be decomposed.
    #[error("transform error: {0}")]
    Transform(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridError {
    /// Build a [`GridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }

    /// Build a [`GridError::Transform`] value.
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Build a [`GridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

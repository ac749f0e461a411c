use thiserror::Error;

/// Rejected tunable in a [`crate::SeekerConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and not negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be within (0, 360] degrees (got {value})")]
    AngleOutOfRange { field: &'static str, value: f32 },

    #[error("search_point_count must be at least 1")]
    NoSearchPoints,
}

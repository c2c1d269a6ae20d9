//! Configuration error types.
//!
//! These are reported when a card configuration is edited, never while
//! rendering. Rendering degrades instead of failing.

/// Errors in a user-authored card configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `tap_action: info` needs an entity to show
    #[error("tap action \"info\" requires tap_action_entity")]
    MissingTapEntity,

    /// `tap_action: service` needs a service to call
    #[error("tap action \"service\" requires service_config")]
    MissingServiceConfig,

    /// A service config field is empty
    #[error("service_config.{0} must not be empty")]
    EmptyServiceField(&'static str),

    /// The configuration isn't valid JSON for a card
    #[error("invalid card configuration: {0}")]
    Malformed(String),
}

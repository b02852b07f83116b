use thiserror::Error;

/// Failures on the live generation path. Display strings keep the
/// legacy "Error:" prefix so a rendered failure still reads like the
/// sentinel text the old pipeline put on the wire.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Error: {0}")]
    Provider(String),
    #[error("Error: authentication failed ({0})")]
    Auth(String),
    #[error("Error: malformed completion payload: {0}")]
    Schema(String),
}

//! Host-testable logic behind the todos
//! front-end: the state container, the
//! filter engine, payload decoding and
//! build-time configuration.

pub mod config;
pub mod error;
pub mod filter;
pub mod payload;
pub mod state;

pub use config::AppConfig;
pub use error::{
  ErrorMessage,
  LoadError
};
pub use state::{
  Action,
  ErrorState,
  TodoState
};
pub use todos_shared::{
  Task,
  TaskFilter
};

/// Outcome of one fetch, translated into
/// the action the loader dispatches. On
/// failure the error occurrence is tagged
/// with `generation`, which is returned so
/// the caller can schedule its expiry.
pub fn load_outcome(
  generation: u64,
  result: Result<Vec<Task>, LoadError>
) -> (Action, Option<u64>) {
  match result {
    | Ok(tasks) => {
      (Action::TasksLoaded(tasks), None)
    }
    | Err(err) => {
      tracing::warn!(
        kind = err.kind(),
        error = %err,
        generation,
        "task load failed"
      );
      (
        Action::LoadFailed {
          message: err.user_message(),
          generation
        },
        Some(generation)
      )
    }
  }
}

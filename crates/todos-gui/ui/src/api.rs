use gloo::net::http::Request;
use todos_core::LoadError;
use todos_core::payload::{
  check_status,
  decode_tasks,
  todos_url
};
use todos_shared::Task;

/// Fetches every task owned by `user_id`.
/// Transport, status and payload failures
/// are all reported as a [`LoadError`].
pub async fn load_tasks(
  api_base_url: &str,
  user_id: u64
) -> Result<Vec<Task>, LoadError> {
  let url =
    todos_url(api_base_url, user_id);
  tracing::debug!(url = %url, "fetching tasks");

  let response = Request::get(&url)
    .send()
    .await
    .map_err(|e| {
      LoadError::Network(e.to_string())
    })?;

  check_status(response.status())?;

  let body =
    response.text().await.map_err(|e| {
      LoadError::Network(e.to_string())
    })?;

  decode_tasks(&body)
}

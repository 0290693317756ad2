use todos_shared::Task;
use tracing::debug;

use crate::error::LoadError;

/// `GET {base}/todos?userId={id}`.
pub fn todos_url(
  api_base_url: &str,
  user_id: u64
) -> String {
  format!(
    "{}/todos?userId={user_id}",
    api_base_url.trim_end_matches('/')
  )
}

pub fn check_status(
  status: u16
) -> Result<(), LoadError> {
  if (200..300).contains(&status) {
    Ok(())
  } else {
    Err(LoadError::Status(status))
  }
}

pub fn decode_tasks(
  body: &str
) -> Result<Vec<Task>, LoadError> {
  let tasks: Vec<Task> =
    serde_json::from_str(body).map_err(
      |err| LoadError::Decode(err.to_string())
    )?;
  debug!(
    count = tasks.len(),
    "decoded task payload"
  );
  Ok(tasks)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_has_user_query_and_no_double_slash()
  {
    assert_eq!(
      todos_url(
        "https://example.test/api/",
        12
      ),
      "https://example.test/api/todos?userId=12"
    );
  }

  #[test]
  fn non_2xx_is_a_status_error() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert_eq!(
      check_status(404),
      Err(LoadError::Status(404))
    );
    assert_eq!(
      check_status(301),
      Err(LoadError::Status(301))
    );
  }

  #[test]
  fn decodes_array_in_server_order() {
    let body = r#"[
      {"id":3,"title":"c","completed":false,"userId":1},
      {"id":1,"title":"a","completed":true,"userId":1}
    ]"#;
    let tasks =
      decode_tasks(body).expect("decode");

    assert_eq!(
      tasks
        .iter()
        .map(|t| t.id)
        .collect::<Vec<_>>(),
      vec![3, 1]
    );
  }

  #[test]
  fn malformed_payloads_are_decode_errors()
  {
    for body in [
      "not json",
      r#"{"id":1}"#,
      r#"[{"title":"no id"}]"#
    ] {
      assert!(matches!(
        decode_tasks(body),
        Err(LoadError::Decode(_))
      ));
    }
  }
}

use serde::{
  Deserialize,
  Serialize
};

/// A single to-do record as served by
/// the remote `/todos` endpoint. A record
/// missing `title` or `completed` decodes
/// as `""` / `false` rather than failing.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        u64,
  #[serde(default)]
  pub title:     String,
  #[serde(default)]
  pub completed: bool,
  #[serde(rename = "userId")]
  pub user_id:   u64
}

impl Task {
  pub fn is_active(&self) -> bool {
    !self.completed
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
pub enum TaskFilter {
  #[default]
  All,
  Active,
  Completed
}

impl TaskFilter {
  pub const ALL: [TaskFilter; 3] = [
    TaskFilter::All,
    TaskFilter::Active,
    TaskFilter::Completed
  ];

  pub fn label(self) -> &'static str {
    match self {
      | TaskFilter::All => "All",
      | TaskFilter::Active => "Active",
      | TaskFilter::Completed => {
        "Completed"
      }
    }
  }

  /// Hash fragment used as the link
  /// target. It is a label only; nothing
  /// routes on it.
  pub fn fragment(
    self
  ) -> &'static str {
    match self {
      | TaskFilter::All => "#/",
      | TaskFilter::Active => {
        "#/active"
      }
      | TaskFilter::Completed => {
        "#/completed"
      }
    }
  }

  pub fn test_hook(
    self
  ) -> &'static str {
    match self {
      | TaskFilter::All => {
        "FilterLinkAll"
      }
      | TaskFilter::Active => {
        "FilterLinkActive"
      }
      | TaskFilter::Completed => {
        "FilterLinkCompleted"
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | TaskFilter::All => true,
      | TaskFilter::Active => {
        !task.completed
      }
      | TaskFilter::Completed => {
        task.completed
      }
    }
  }
}

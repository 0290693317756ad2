use todos_shared::{
  Task,
  TaskFilter
};
use tracing::{
  debug,
  warn
};

use crate::error::ErrorMessage;
use crate::filter;

/// The one error occurrence currently on
/// screen. Every occurrence carries the
/// generation its producer allocated, so a
/// pending auto-clear only ever hides the
/// error it was scheduled for.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ErrorState {
  message:    String,
  generation: u64
}

impl ErrorState {
  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn is_visible(&self) -> bool {
    !self.message.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  TasksLoaded(Vec<Task>),
  LoadFailed {
    message:    ErrorMessage,
    generation: u64
  },
  ExpireError(u64),
  DismissError,
  SetFilter(TaskFilter),
  Toggle(u64),
  Delete(u64),
  Add(String),
  ToggleAll,
  ClearCompleted
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TodoState {
  user_id: u64,
  tasks:   Vec<Task>,
  filter:  TaskFilter,
  error:   ErrorState
}

impl TodoState {
  pub fn new(user_id: u64) -> Self {
    Self {
      user_id,
      ..Self::default()
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn filter(&self) -> TaskFilter {
    self.filter
  }

  pub fn error(&self) -> &ErrorState {
    &self.error
  }

  pub fn visible(&self) -> Vec<Task> {
    filter::visible(
      &self.tasks,
      self.filter
    )
  }

  pub fn active_count(&self) -> usize {
    filter::active_count(&self.tasks)
  }

  pub fn has_completed(&self) -> bool {
    filter::completed_count(&self.tasks)
      > 0
  }

  pub fn all_completed(&self) -> bool {
    filter::all_completed(&self.tasks)
  }

  /// The footer belongs to the collection,
  /// not the filtered view.
  pub fn shows_footer(&self) -> bool {
    !self.tasks.is_empty()
  }

  /// `None` once the id space is used up.
  fn next_id(&self) -> Option<u64> {
    match self
      .tasks
      .iter()
      .map(|task| task.id)
      .max()
    {
      | Some(max) => max.checked_add(1),
      | None => Some(1)
    }
  }

  pub fn apply(
    &mut self,
    action: Action
  ) {
    match action {
      | Action::TasksLoaded(tasks) => {
        debug!(
          count = tasks.len(),
          "replacing task collection"
        );
        self.tasks = tasks;
      }
      | Action::LoadFailed {
        message,
        generation
      } => {
        self.error.generation = generation;
        self.error.message =
          message.as_str().to_string();
        debug!(
          generation =
            self.error.generation,
          %message,
          "showing error"
        );
      }
      | Action::ExpireError(
        generation
      ) => {
        if generation
          == self.error.generation
        {
          self.error.message.clear();
        } else {
          debug!(
            generation,
            current = self.error.generation,
            "ignoring stale error expiry"
          );
        }
      }
      | Action::DismissError => {
        self.error.message.clear();
      }
      | Action::SetFilter(filter) => {
        debug!(?filter, "filter selected");
        self.filter = filter;
      }
      | Action::Toggle(id) => {
        if let Some(task) = self
          .tasks
          .iter_mut()
          .find(|task| task.id == id)
        {
          task.completed =
            !task.completed;
          debug!(
            id,
            completed = task.completed,
            "toggled task"
          );
        }
      }
      | Action::Delete(id) => {
        let before = self.tasks.len();
        self
          .tasks
          .retain(|task| task.id != id);
        debug!(
          id,
          removed =
            before - self.tasks.len(),
          "deleted task"
        );
      }
      | Action::Add(title) => {
        let title = title.trim();
        if title.is_empty() {
          debug!(
            "ignoring blank task title"
          );
          return;
        }
        let Some(id) = self.next_id()
        else {
          warn!(
            "no free task id left; \
             ignoring new task"
          );
          return;
        };
        let task = Task {
          id,
          title:     title.to_string(),
          completed: false,
          user_id:   self.user_id
        };
        debug!(id = task.id, "added task");
        self.tasks.push(task);
      }
      | Action::ToggleAll => {
        let completed =
          !self.all_completed();
        for task in &mut self.tasks {
          task.completed = completed;
        }
        debug!(
          completed,
          count = self.tasks.len(),
          "toggled all tasks"
        );
      }
      | Action::ClearCompleted => {
        self
          .tasks
          .retain(Task::is_active);
      }
    }
  }
}

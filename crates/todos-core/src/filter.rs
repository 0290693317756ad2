use todos_shared::{
  Task,
  TaskFilter
};
use tracing::trace;

/// Tasks shown under `filter`, in
/// collection order.
pub fn visible(
  tasks: &[Task],
  filter: TaskFilter
) -> Vec<Task> {
  let shown: Vec<Task> = tasks
    .iter()
    .filter(|task| filter.matches(task))
    .cloned()
    .collect();

  trace!(
    total = tasks.len(),
    shown = shown.len(),
    ?filter,
    "computed visible tasks"
  );
  shown
}

/// Always counts over the whole
/// collection, never the filtered view.
pub fn active_count(
  tasks: &[Task]
) -> usize {
  tasks
    .iter()
    .filter(|task| task.is_active())
    .count()
}

pub fn completed_count(
  tasks: &[Task]
) -> usize {
  tasks.len() - active_count(tasks)
}

pub fn all_completed(
  tasks: &[Task]
) -> bool {
  !tasks.is_empty()
    && tasks
      .iter()
      .all(|task| task.completed)
}

pub fn items_left_label(
  active: usize
) -> String {
  format!("{active} items left")
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;
  use todos_shared::{
    Task,
    TaskFilter
  };

  use super::*;

  fn task(
    id: u64,
    title: &str,
    completed: bool
  ) -> Task {
    Task {
      id,
      title: title.to_string(),
      completed,
      user_id: 1
    }
  }

  fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks
      .iter()
      .map(|task| task.id)
      .collect()
  }

  fn arb_tasks()
  -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
      any::<bool>(),
      0..40
    )
    .prop_map(|flags| {
      flags
        .into_iter()
        .enumerate()
        .map(|(idx, completed)| {
          task(
            idx as u64 + 1,
            &format!("task {idx}"),
            completed
          )
        })
        .collect()
    })
  }

  #[test]
  fn mixed_collection_under_each_filter()
  {
    let tasks = vec![
      task(1, "A", false),
      task(2, "B", true),
    ];

    assert_eq!(
      ids(&visible(
        &tasks,
        TaskFilter::All
      )),
      vec![1, 2]
    );
    assert_eq!(
      ids(&visible(
        &tasks,
        TaskFilter::Active
      )),
      vec![1]
    );
    assert_eq!(
      ids(&visible(
        &tasks,
        TaskFilter::Completed
      )),
      vec![2]
    );
    assert_eq!(active_count(&tasks), 1);
    assert_eq!(
      items_left_label(
        active_count(&tasks)
      ),
      "1 items left"
    );
  }

  #[test]
  fn all_completed_requires_non_empty()
  {
    assert!(!all_completed(&[]));
    assert!(all_completed(&[task(
      1, "done", true
    )]));
    assert!(!all_completed(&[
      task(1, "done", true),
      task(2, "open", false)
    ]));
  }

  proptest! {
      #[test]
      fn all_filter_keeps_every_task(tasks in arb_tasks()) {
          prop_assert_eq!(visible(&tasks, TaskFilter::All), tasks);
      }

      #[test]
      fn active_and_completed_partition_in_order(tasks in arb_tasks()) {
          let active = visible(&tasks, TaskFilter::Active);
          let completed = visible(&tasks, TaskFilter::Completed);

          prop_assert_eq!(active.len() + completed.len(), tasks.len());
          prop_assert!(active.iter().all(|task| !completed.contains(task)));

          let expected_active: Vec<u64> =
              tasks.iter().filter(|t| !t.completed).map(|t| t.id).collect();
          let expected_completed: Vec<u64> =
              tasks.iter().filter(|t| t.completed).map(|t| t.id).collect();
          prop_assert_eq!(ids(&active), expected_active);
          prop_assert_eq!(ids(&completed), expected_completed);
      }

      #[test]
      fn active_count_is_total_minus_completed(tasks in arb_tasks()) {
          let done = tasks.iter().filter(|t| t.completed).count();
          prop_assert_eq!(active_count(&tasks), tasks.len() - done);
          prop_assert_eq!(completed_count(&tasks), done);
      }
  }
}

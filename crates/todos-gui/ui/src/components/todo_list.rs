use todos_shared::Task;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TodoItem;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>
}

/// One row, keyed by the task id.
pub(crate) fn item_row(
  task: Task,
  on_toggle: &Callback<u64>,
  on_delete: &Callback<u64>
) -> Html {
  let id = task.id;
  html! {
      <TodoItem
          key={id}
          task={task}
          on_toggle={on_toggle.clone()}
          on_delete={on_delete.clone()}
      />
  }
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <section class="todoapp__main" data-cy="TodoList">
          {
              for props.tasks.iter().cloned().map(|task| {
                  item_row(task, &props.on_toggle, &props.on_delete)
              })
          }
      </section>
  }
}

use todos_shared::Task;
use yew::{
  Callback,
  Classes,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
  pub task:      Task,
  pub on_toggle: Callback<u64>,
  pub on_delete: Callback<u64>,
  /// Shows the overlay while a per-item
  /// request is in flight.
  #[prop_or_default]
  pub loading:   bool
}

pub(crate) fn row_classes(
  completed: bool
) -> Classes {
  classes!(
    "todo",
    completed.then_some("completed")
  )
}

pub(crate) fn loader_classes(
  loading: bool
) -> Classes {
  classes!(
    "modal",
    "overlay",
    loading.then_some("is-active")
  )
}

#[function_component(TodoItem)]
pub fn todo_item(
  props: &TodoItemProps
) -> Html {
  let id = props.task.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <div data-cy="Todo" class={row_classes(props.task.completed)}>
          <label class="todo__status-label">
              <input
                  data-cy="TodoStatus"
                  type="checkbox"
                  class="todo__status"
                  checked={props.task.completed}
                  onchange={move |_| on_toggle.emit(id)}
              />
          </label>

          <span data-cy="TodoTitle" class="todo__title">
              { &props.task.title }
          </span>

          <button
              type="button"
              class="todo__remove"
              data-cy="TodoDelete"
              onclick={move |_: MouseEvent| on_delete.emit(id)}
          >
              { "×" }
          </button>

          <div data-cy="TodoLoader" class={loader_classes(props.loading)}>
              <div class="modal-background has-background-white-ter"></div>
              <div class="loader"></div>
          </div>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn completed_rows_carry_completed_class()
  {
    let done = row_classes(true);
    assert!(done.contains("todo"));
    assert!(done.contains("completed"));

    let open = row_classes(false);
    assert!(open.contains("todo"));
    assert!(!open.contains("completed"));
  }

  #[test]
  fn loader_is_hidden_by_default() {
    let idle = loader_classes(false);
    assert!(idle.contains("overlay"));
    assert!(!idle.contains("is-active"));
    assert!(
      loader_classes(true)
        .contains("is-active")
    );
  }
}

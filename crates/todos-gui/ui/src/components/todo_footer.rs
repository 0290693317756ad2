use todos_core::filter::items_left_label;
use todos_shared::TaskFilter;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::FilterLink;

#[derive(Properties, PartialEq)]
pub struct TodoFooterProps {
  pub active_count:       usize,
  pub filter:             TaskFilter,
  pub has_completed:      bool,
  pub on_filter:          Callback<TaskFilter>,
  pub on_clear_completed: Callback<()>
}

#[function_component(TodoFooter)]
pub fn todo_footer(
  props: &TodoFooterProps
) -> Html {
  let on_clear_completed =
    props.on_clear_completed.clone();

  html! {
      <footer class="todoapp__footer" data-cy="Footer">
          <span class="todo-count" data-cy="TodosCounter">
              { items_left_label(props.active_count) }
          </span>

          <nav class="filter" data-cy="Filter">
              {
                  for TaskFilter::ALL.into_iter().map(|filter| html! {
                      <FilterLink
                          key={filter.label()}
                          filter={filter}
                          selected={filter == props.filter}
                          on_select={props.on_filter.clone()}
                      />
                  })
              }
          </nav>

          <button
              type="button"
              class="todoapp__clear-completed"
              data-cy="ClearCompletedButton"
              disabled={!props.has_completed}
              onclick={move |_: MouseEvent| on_clear_completed.emit(())}
          >
              { "Clear completed" }
          </button>
      </footer>
  }
}

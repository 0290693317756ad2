use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TodoHeaderProps {
  pub all_completed: bool,
  pub on_toggle_all: Callback<()>,
  pub on_add:        Callback<String>
}

#[function_component(TodoHeader)]
pub fn todo_header(
  props: &TodoHeaderProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        if draft.trim().is_empty() {
          return;
        }
        on_add.emit((*draft).clone());
        draft.set(String::new());
      }
    )
  };

  let on_toggle_all =
    props.on_toggle_all.clone();

  html! {
      <header class="todoapp__header">
          <button
              type="button"
              class={classes!(
                  "todoapp__toggle-all",
                  props.all_completed.then_some("active")
              )}
              data-cy="ToggleAllButton"
              onclick={move |_: MouseEvent| on_toggle_all.emit(())}
          />

          <form onsubmit={on_submit}>
              <input
                  data-cy="NewTodoField"
                  type="text"
                  class="todoapp__new-todo"
                  placeholder="What needs to be done?"
                  value={(*draft).clone()}
                  oninput={on_input}
              />
          </form>
      </header>
  }
}

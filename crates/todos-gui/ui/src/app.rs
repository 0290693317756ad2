use std::cell::Cell;
use std::rc::Rc;

use gloo::console::log;
use gloo::timers::future::TimeoutFuture;
use todos_core::{
  Action,
  AppConfig,
  TodoState,
  load_outcome
};
use todos_shared::TaskFilter;
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer
};

use crate::api::load_tasks;
use crate::components::{
  ErrorNotification,
  TodoFooter,
  TodoHeader,
  TodoList,
  UserWarning
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: AppConfig
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  UserWarning,
  Tasks { user_id: u64 }
}

/// A build without a user id gets only
/// the warning screen; the task UI, and
/// with it the fetch, is never mounted.
pub fn screen_for(
  config: &AppConfig
) -> Screen {
  match config.user_id {
    | Some(user_id) => {
      Screen::Tasks { user_id }
    }
    | None => Screen::UserWarning
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterView {
  pub active_count:  usize,
  pub filter:        TaskFilter,
  pub has_completed: bool
}

/// `None` while the collection is empty,
/// whatever the filter shows.
pub fn footer_view(
  state: &TodoState
) -> Option<FooterView> {
  state.shows_footer().then(|| {
    FooterView {
      active_count:  state.active_count(),
      filter:        state.filter(),
      has_completed: state.has_completed()
    }
  })
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  match screen_for(&props.config) {
    | Screen::Tasks { user_id } => html! {
        <TodoApp user_id={user_id} config={props.config.clone()} />
    },
    | Screen::UserWarning => {
      tracing::warn!(
        "no user id configured; \
         showing warning screen"
      );
      html! { <UserWarning /> }
    }
  }
}

#[derive(Clone, PartialEq)]
pub struct AppStore {
  state: TodoState
}

impl AppStore {
  pub fn new(user_id: u64) -> Self {
    Self {
      state: TodoState::new(user_id)
    }
  }

  pub fn state(&self) -> &TodoState {
    &self.state
  }
}

impl Reducible for AppStore {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next =
      Rc::unwrap_or_clone(self);
    next.state.apply(action);
    Rc::new(next)
  }
}

#[derive(Properties, PartialEq)]
struct TodoAppProps {
  user_id: u64,
  config:  AppConfig
}

#[function_component(TodoApp)]
fn todo_app(
  props: &TodoAppProps
) -> Html {
  let user_id = props.user_id;
  let store = use_reducer(move || {
    AppStore::new(user_id)
  });
  let error_generation =
    use_mut_ref(|| 0_u64);

  {
    let dispatcher = store.dispatcher();
    let error_generation =
      error_generation.clone();
    let api_base_url =
      props.config.api_base_url.clone();
    let error_timeout_ms =
      props.config.error_timeout_ms;

    use_effect_with((), move |_| {
      let alive = Rc::new(Cell::new(true));
      let guard = alive.clone();

      wasm_bindgen_futures::spawn_local(async move {
                let result = load_tasks(&api_base_url, user_id).await;
                if !alive.get() {
                    tracing::debug!("app unmounted; dropping task load result");
                    return;
                }

                let generation = {
                    let mut current = error_generation.borrow_mut();
                    *current += 1;
                    *current
                };
                let (action, expiry) = load_outcome(generation, result);
                dispatcher.dispatch(action);

                if let Some(generation) = expiry {
                    ui_debug("load.failed", "scheduling error auto-clear");
                    TimeoutFuture::new(error_timeout_ms).await;
                    if alive.get() {
                        dispatcher.dispatch(Action::ExpireError(generation));
                    }
                }
            });

      move || guard.set(false)
    });
  }

  let state = store.state();
  let visible = state.visible();

  let on_toggle = {
    let store = store.clone();
    Callback::from(move |id: u64| {
      store.dispatch(Action::Toggle(id))
    })
  };
  let on_delete = {
    let store = store.clone();
    Callback::from(move |id: u64| {
      store.dispatch(Action::Delete(id))
    })
  };
  let on_add = {
    let store = store.clone();
    Callback::from(
      move |title: String| {
        store.dispatch(Action::Add(title))
      }
    )
  };
  let on_toggle_all = {
    let store = store.clone();
    Callback::from(move |_: ()| {
      store.dispatch(Action::ToggleAll)
    })
  };
  let on_filter = {
    let store = store.clone();
    Callback::from(
      move |filter: TaskFilter| {
        ui_debug(
          "action.filter",
          filter.label()
        );
        store.dispatch(
          Action::SetFilter(filter)
        )
      }
    )
  };
  let on_clear_completed = {
    let store = store.clone();
    Callback::from(move |_: ()| {
      store
        .dispatch(Action::ClearCompleted)
    })
  };
  let on_dismiss_error = {
    let store = store.clone();
    Callback::from(move |_: ()| {
      store
        .dispatch(Action::DismissError)
    })
  };

  html! {
      <div class="todoapp">
          <h1 class="todoapp__title">{ "todos" }</h1>

          <div class="todoapp__content">
              <TodoHeader
                  all_completed={state.all_completed()}
                  on_toggle_all={on_toggle_all}
                  on_add={on_add}
              />

              <TodoList
                  tasks={visible}
                  on_toggle={on_toggle}
                  on_delete={on_delete}
              />

              {
                  match footer_view(state) {
                      Some(footer) => html! {
                          <TodoFooter
                              active_count={footer.active_count}
                              filter={footer.filter}
                              has_completed={footer.has_completed}
                              on_filter={on_filter}
                              on_clear_completed={on_clear_completed}
                          />
                      },
                      None => html! {}
                  }
              }
          </div>

          <ErrorNotification
              message={state.error().message().to_string()}
              on_dismiss={on_dismiss_error}
          />
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}

#[cfg(test)]
mod tests {
  use todos_core::ErrorMessage;
  use todos_shared::Task;

  use super::*;

  fn reduce(
    store: AppStore,
    action: Action
  ) -> AppStore {
    Rc::unwrap_or_clone(
      Rc::new(store).reduce(action)
    )
  }

  #[test]
  fn reducer_applies_actions_to_latest_state()
  {
    let store = AppStore::new(4);
    let store = reduce(
      store,
      Action::TasksLoaded(vec![
        Task {
          id:        1,
          title:     "A".to_string(),
          completed: false,
          user_id:   4
        },
        Task {
          id:        2,
          title:     "B".to_string(),
          completed: true,
          user_id:   4
        },
      ])
    );
    let store = reduce(
      store,
      Action::SetFilter(
        TaskFilter::Completed
      )
    );

    assert_eq!(
      store.state().visible().len(),
      1
    );
    assert_eq!(
      store.state().active_count(),
      1
    );
  }

  fn task(
    id: u64,
    completed: bool
  ) -> Task {
    Task {
      id,
      title: format!("task {id}"),
      completed,
      user_id: 4
    }
  }

  #[test]
  fn missing_user_id_selects_warning_screen()
  {
    let unset = AppConfig::default();
    assert_eq!(
      screen_for(&unset),
      Screen::UserWarning
    );

    let configured = AppConfig {
      user_id: Some(9),
      ..AppConfig::default()
    };
    assert_eq!(
      screen_for(&configured),
      Screen::Tasks { user_id: 9 }
    );
  }

  #[test]
  fn footer_follows_collection_not_filter()
  {
    let empty = AppStore::new(4);
    assert_eq!(
      footer_view(empty.state()),
      None
    );

    let store = reduce(
      empty,
      Action::TasksLoaded(vec![task(
        1, true
      )])
    );
    let store = reduce(
      store,
      Action::SetFilter(
        TaskFilter::Active
      )
    );

    assert!(
      store.state().visible().is_empty()
    );
    assert_eq!(
      footer_view(store.state()),
      Some(FooterView {
        active_count:  0,
        filter:        TaskFilter::Active,
        has_completed: true
      })
    );
  }

  #[test]
  fn late_expiry_does_not_touch_tasks()
  {
    let store = reduce(
      AppStore::new(4),
      Action::LoadFailed {
        message:    ErrorMessage::UnableToLoad,
        generation: 1
      }
    );
    let store = reduce(
      store,
      Action::Add("typed meanwhile".to_string())
    );
    let store =
      reduce(store, Action::ExpireError(1));

    assert!(
      !store.state().error().is_visible()
    );
    assert_eq!(
      store.state().tasks().len(),
      1
    );
  }
}

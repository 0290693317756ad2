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
pub struct ErrorNotificationProps {
  /// Empty means nothing to show; the
  /// banner stays mounted and is hidden.
  pub message:    String,
  pub on_dismiss: Callback<()>
}

pub(crate) fn banner_classes(
  message: &str
) -> Classes {
  classes!(
    "notification",
    "is-danger",
    "is-light",
    "has-text-weight-normal",
    message.is_empty().then_some("hidden")
  )
}

#[function_component(ErrorNotification)]
pub fn error_notification(
  props: &ErrorNotificationProps
) -> Html {
  let on_dismiss =
    props.on_dismiss.clone();

  html! {
      <div data-cy="ErrorNotification" class={banner_classes(&props.message)}>
          <button
              data-cy="HideErrorButton"
              type="button"
              class="delete"
              onclick={move |_: MouseEvent| on_dismiss.emit(())}
          />
          { &props.message }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hidden_only_without_message() {
    assert!(
      banner_classes("").contains("hidden")
    );

    let shown =
      banner_classes("Unable to load todos");
    assert!(!shown.contains("hidden"));
    assert!(shown.contains("is-danger"));
  }
}

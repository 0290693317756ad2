use todos_shared::TaskFilter;
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
pub struct FilterLinkProps {
  pub filter:    TaskFilter,
  pub selected:  bool,
  pub on_select: Callback<TaskFilter>
}

pub(crate) fn link_classes(
  selected: bool
) -> Classes {
  classes!(
    "filter__link",
    selected.then_some("selected")
  )
}

/// The `href` is only a label; selecting a
/// filter never reloads the page.
#[function_component(FilterLink)]
pub fn filter_link(
  props: &FilterLinkProps
) -> Html {
  let filter = props.filter;
  let on_select =
    props.on_select.clone();

  html! {
      <a
          href={filter.fragment()}
          class={link_classes(props.selected)}
          data-cy={filter.test_hook()}
          onclick={move |_: MouseEvent| on_select.emit(filter)}
      >
          { filter.label() }
      </a>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_the_selected_link_is_marked() {
    let current = TaskFilter::Active;
    let marked: Vec<TaskFilter> =
      TaskFilter::ALL
        .into_iter()
        .filter(|filter| {
          link_classes(*filter == current)
            .contains("selected")
        })
        .collect();

    assert_eq!(
      marked,
      vec![TaskFilter::Active]
    );
  }
}

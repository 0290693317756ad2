use yew::{
  Html,
  function_component,
  html
};

#[function_component(UserWarning)]
pub fn user_warning() -> Html {
  html! {
      <section class="section user-warning">
          <p class="box is-size-3">
              { "Please set " }
              <code>{ "TODOS_USER_ID" }</code>
              { " at build time to your user id, then rebuild the app." }
          </p>
      </section>
  }
}

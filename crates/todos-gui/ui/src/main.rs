mod api;
mod app;
mod components;

use todos_core::AppConfig;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting todos frontend"
  );

  let config = AppConfig::resolve(
    APP_CONFIG_TOML,
    option_env!("TODOS_USER_ID"),
    option_env!("TODOS_API_URL")
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps { config }
  )
  .render();
}

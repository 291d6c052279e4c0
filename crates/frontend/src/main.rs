mod app;
mod host;
mod logging;
mod pages;
mod render;
mod shell;

use app::{App, PageProps};
use hbnb_frontend_common::{HbnbApi, browser};
use shell::Shell;
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();

    let shell = match Shell::find() {
        Ok(shell) => shell,
        Err(error) => {
            logging::init(None);
            tracing::error!(%error, "Cannot start the client");
            return;
        }
    };
    logging::init(shell.log_level().as_deref());

    let loaded = shell
        .page_kind()
        .and_then(|kind| shell.context().map(|context| (kind, context)));
    let (kind, context) = match loaded {
        Ok(loaded) => loaded,
        Err(error) => {
            tracing::error!(%error, "Cannot start the client");
            return;
        }
    };

    let api = match HbnbApi::new(&context.config) {
        Ok(api) => Rc::new(api),
        Err(error) => {
            tracing::error!(%error, "Cannot build the API client");
            browser::alert("API connection error.");
            return;
        }
    };

    tracing::info!(page = %kind, api = %context.config.api_base, "Starting client");
    let props = PageProps { kind, context, api };
    yew::Renderer::<App>::with_root_and_props(shell.into_root(), props).render();
}

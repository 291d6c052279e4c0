use super::{Header, use_page_init};
use crate::app::PageProps;
use crate::host::use_page_host;
use hbnb_frontend_common::pages::submit_login;
use hbnb_http::types::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginPage)]
pub fn login_page(props: &PageProps) -> Html {
    let host = use_page_host();
    let email = use_node_ref();
    let password = use_node_ref();
    use_page_init(props, &host);

    let on_submit = {
        let host = host.clone();
        let email = email.clone();
        let password = password.clone();
        let config = props.context.config.clone();
        let api = props.api.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let credentials = LoginRequest {
                email: input_value(&email),
                password: input_value(&password),
            };

            let host = host.clone();
            let config = config.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submit_login(&config, credentials, api.as_ref(), &host).await;
            });
        })
    };

    html! {
        <>
            <Header
                index_page={props.context.config.index_page}
                login_page={props.context.config.login_page}
            />
            <main>
                <form id="login-form" class="login-form" onsubmit={on_submit}>
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" name="email" required=true ref={email} />
                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" name="password" required=true ref={password} />
                    <button type="submit" class="login-button">{"Login"}</button>
                </form>
            </main>
        </>
    }
}

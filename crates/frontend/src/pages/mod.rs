mod add_review;
mod index;
mod login;
mod place;

pub use add_review::AddReviewPage;
pub use index::IndexPage;
pub use login::LoginPage;
pub use place::PlacePage;

use crate::app::PageProps;
use crate::host::BrowserHost;
use crate::render::affordance_style;
use hbnb_frontend_common::pages::dispatch;
use yew::prelude::*;

/// Run the page's load-time flow once, after the first render
#[hook]
pub fn use_page_init(props: &PageProps, host: &BrowserHost) {
    let kind = props.kind;
    let context = props.context.clone();
    let api = props.api.clone();
    let host = host.clone();
    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            dispatch(kind, &context, api.as_ref(), &host).await;
        });
        || ()
    });
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub index_page: &'static str,
    pub login_page: &'static str,
    #[prop_or_default]
    pub login_link_visible: Option<bool>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header>
            <a href={props.index_page} class="logo">{"HBnB"}</a>
            <a
                id="login-link"
                class="login-button"
                href={props.login_page}
                style={affordance_style(props.login_link_visible)}
            >
                {"Login"}
            </a>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_header_links_follow_configured_pages() {
        let html = yew::ServerRenderer::<Header>::with_props(|| HeaderProps {
            index_page: "home.html",
            login_page: "signin.html",
            login_link_visible: Some(false),
        })
        .render()
        .await;

        assert!(html.contains(r#"href="home.html""#), "{html}");
        assert!(html.contains(r#"href="signin.html""#), "{html}");
        assert!(html.contains("display: none"), "{html}");
        assert!(!html.contains("index.html"), "{html}");
    }
}

use super::{Header, use_page_init};
use crate::app::PageProps;
use crate::host::use_page_host;
use crate::render::{affordance_style, render_region};
use hbnb_frontend_common::view::place_link;
use yew::prelude::*;

#[function_component(PlacePage)]
pub fn place_page(props: &PageProps) -> Html {
    let host = use_page_host();

    use_page_init(props, &host);

    let state = host.state();
    let config = &props.context.config;
    let review_href = props
        .context
        .place_id
        .as_deref()
        .map(|id| place_link(config.add_review_page, id));

    html! {
        <>
            <Header
                index_page={config.index_page}
                login_page={config.login_page}
                login_link_visible={state.login_link_visible}
            />
            <main>
                <section id="place-details">
                    { render_region(state.place_details.as_deref()) }
                </section>
                <section id="add-review" style={affordance_style(state.add_review_visible)}>
                    if let Some(href) = review_href {
                        <a href={href} class="add-review-button">{"Add a review"}</a>
                    }
                </section>
            </main>
        </>
    }
}

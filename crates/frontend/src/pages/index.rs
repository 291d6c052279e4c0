use super::{Header, use_page_init};
use crate::app::PageProps;
use crate::host::use_page_host;
use crate::render::render_region;
use hbnb_frontend_common::PriceThreshold;
use hbnb_frontend_common::config::PRICE_FILTER_OPTIONS;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(IndexPage)]
pub fn index_page(props: &PageProps) -> Html {
    let host = use_page_host();

    use_page_init(props, &host);

    let on_filter_change = {
        let host = host.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            match select.value().parse::<PriceThreshold>() {
                Ok(threshold) => host.select_price(threshold),
                Err(error) => tracing::warn!(%error, "Ignoring price filter value"),
            }
        })
    };

    let state = host.state();

    html! {
        <>
            <Header
                index_page={props.context.config.index_page}
                login_page={props.context.config.login_page}
                login_link_visible={state.login_link_visible}
            />
            <main>
                <section id="filter">
                    <label for="price-filter">{"Max price:"}</label>
                    <select id="price-filter" onchange={on_filter_change}>
                        { for PRICE_FILTER_OPTIONS.iter().map(|option| html! {
                            <option value={*option}>{*option}</option>
                        }) }
                    </select>
                </section>
                <section id="places-list">
                    { render_region(state.places.as_deref()) }
                </section>
            </main>
        </>
    }
}

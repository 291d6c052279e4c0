use super::{Header, use_page_init};
use crate::app::PageProps;
use crate::host::use_page_host;
use hbnb_frontend_common::pages::{ReviewForm, submit_review};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(AddReviewPage)]
pub fn add_review_page(props: &PageProps) -> Html {
    let host = use_page_host();
    let comment = use_node_ref();
    let rating = use_node_ref();

    // Anonymous visitors are sent back to the index before the form exists
    use_page_init(props, &host);

    let on_submit = {
        let host = host.clone();
        let comment = comment.clone();
        let rating = rating.clone();
        let context = props.context.clone();
        let api = props.api.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let form = ReviewForm {
                comment: comment
                    .cast::<HtmlTextAreaElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                rating: rating
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_default(),
            };

            let host = host.clone();
            let context = context.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submit_review(&context, form, api.as_ref(), &host).await;
            });
        })
    };

    let state = host.state();
    if !state.review_form_visible {
        return html! {};
    }

    html! {
        <>
            <Header
                index_page={props.context.config.index_page}
                login_page={props.context.config.login_page}
                login_link_visible={Some(false)}
            />
            <main>
                <section class="add-review">
                    <h2>{"Add a review"}</h2>
                    // A new key after each successful submission clears the inputs
                    <form
                        id="review-form"
                        key={state.review_form_generation.to_string()}
                        onsubmit={on_submit}
                    >
                        <label for="review-text">{"Your review"}</label>
                        <textarea id="review-text" name="review-text" required=true ref={comment} />
                        <label for="rating">{"Rating"}</label>
                        <select id="rating" name="rating" ref={rating}>
                            { for (1..=5).map(|value| html! {
                                <option value={value.to_string()}>{value.to_string()}</option>
                            }) }
                        </select>
                        <button type="submit">{"Submit"}</button>
                    </form>
                </section>
            </main>
        </>
    }
}

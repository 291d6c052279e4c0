use super::{PageContext, gate, trace_failure};
use crate::api::PlacesApi;
use crate::host::{PageAction, PageHost};
use crate::view;

const LOAD_FAILED: &str = "Could not load places.";

/// Gate the index page, fetch the places and render them as cards, then
/// attach the price filter.
pub async fn init_index(context: &PageContext, api: &impl PlacesApi, host: &impl PageHost) {
    gate(&context.session, host, false);

    let places = match api.list_places(&context.session).await {
        Ok(places) => places,
        Err(error) => {
            trace_failure("list places", &error);
            host.alert(LOAD_FAILED);
            return;
        }
    };

    tracing::debug!(count = places.len(), "Rendering places");
    host.apply(PageAction::RenderPlaces(view::place_list(
        &places,
        context.config.place_page,
    )));
    host.apply(PageAction::AttachPriceFilter);
}

use super::{PageContext, gate, trace_failure};
use crate::api::PlacesApi;
use crate::host::{PageAction, PageHost};
use crate::view;

const MISSING_ID: &str = "No place ID provided.";
const LOAD_FAILED: &str = "Could not load place details.";

/// Gate the detail page, fetch the place named by the `id` parameter and
/// render it with its reviews.
pub async fn init_place(context: &PageContext, api: &impl PlacesApi, host: &impl PageHost) {
    gate(&context.session, host, true);

    let Some(place_id) = context.place_id.as_deref() else {
        host.alert(MISSING_ID);
        return;
    };

    match api.place_details(&context.session, place_id).await {
        Ok(place) => host.apply(PageAction::RenderPlaceDetails(view::place_details(&place))),
        Err(error) => {
            trace_failure("place details", &error);
            host.alert(LOAD_FAILED);
        }
    }
}

use super::{PageContext, trace_failure};
use crate::api::PlacesApi;
use crate::host::{PageAction, PageHost};
use hbnb_http::types::NewReview;

const NO_PLACE: &str = "No place selected.";
const INVALID_RATING: &str = "Please choose a rating from 1 to 5.";
const SUBMITTED: &str = "Review submitted successfully!";
const REJECTED: &str = "Failed to submit review.";
const SUBMIT_ERROR: &str = "Error submitting review.";

/// Raw values of the review form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    pub comment: String,
    pub rating: String,
}

impl ReviewForm {
    fn rating(&self) -> Option<u8> {
        self.rating
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|rating| (1..=5).contains(rating))
    }
}

/// Keep anonymous visitors away from the review form.
///
/// Returns whether the form was shown; without a token the browser is sent
/// to the index page and nothing else happens.
pub fn init_add_review(context: &PageContext, host: &impl PageHost) -> bool {
    if !context.session.is_authenticated() {
        tracing::info!("No session, leaving the review page");
        host.redirect(context.config.index_page);
        return false;
    }

    host.apply(PageAction::ShowReviewForm);
    true
}

/// Post the review form for the place named by the `id` parameter
pub async fn submit_review(
    context: &PageContext,
    form: ReviewForm,
    api: &impl PlacesApi,
    host: &impl PageHost,
) {
    let Some(place_id) = context.place_id.clone() else {
        host.alert(NO_PLACE);
        return;
    };
    let Some(rating) = form.rating() else {
        host.alert(INVALID_RATING);
        return;
    };

    let review = NewReview {
        place_id,
        comment: form.comment,
        rating,
    };

    match api.submit_review(&context.session, &review).await {
        Ok(()) => {
            tracing::info!(place_id = %review.place_id, "Review submitted");
            host.alert(SUBMITTED);
            host.apply(PageAction::ResetReviewForm);
        }
        Err(error) => {
            trace_failure("submit review", &error);
            host.alert(if error.is_transport() {
                SUBMIT_ERROR
            } else {
                REJECTED
            });
        }
    }
}

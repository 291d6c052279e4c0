use crate::pages::{AddReviewPage, IndexPage, LoginPage, PlacePage};
use hbnb_frontend_common::{HbnbApi, PageContext, PageKind};
use std::rc::Rc;
use yew::prelude::*;

/// Properties shared by every page component
#[derive(Clone, Properties)]
pub struct PageProps {
    pub kind: PageKind,
    pub context: PageContext,
    pub api: Rc<HbnbApi>,
}

impl PartialEq for PageProps {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.context == other.context
            && Rc::ptr_eq(&self.api, &other.api)
    }
}

#[function_component(App)]
pub fn app(props: &PageProps) -> Html {
    let props = props.clone();
    match props.kind {
        PageKind::Login => html! { <LoginPage ..props /> },
        PageKind::Index => html! { <IndexPage ..props /> },
        PageKind::Place => html! { <PlacePage ..props /> },
        PageKind::AddReview => html! { <AddReviewPage ..props /> },
    }
}

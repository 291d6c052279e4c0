//! Browser implementation of the page host over a yew reducer

use hbnb_frontend_common::{PageAction, PageHost, PageState, PriceThreshold, Session, browser};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state wrapping the page's visible state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageStore {
    pub state: PageState,
}

pub enum StoreAction {
    Page(PageAction),
    SelectPrice(PriceThreshold),
}

impl Reducible for PageStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::Page(action) => next.state.apply(action),
            StoreAction::SelectPrice(threshold) => {
                if !next.state.select_price(threshold) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Page host handed to the page flows
#[derive(Clone)]
pub struct BrowserHost {
    store: UseReducerHandle<PageStore>,
}

impl BrowserHost {
    pub fn state(&self) -> &PageState {
        &self.store.state
    }

    pub fn select_price(&self, threshold: PriceThreshold) {
        self.store.dispatch(StoreAction::SelectPrice(threshold));
    }
}

impl PageHost for BrowserHost {
    fn alert(&self, message: &str) {
        browser::alert(message);
    }

    fn redirect(&self, target: &str) {
        if let Err(error) = browser::redirect(target) {
            tracing::error!(%error, target, "Navigation failed");
        }
    }

    fn store_token(&self, token: &str) {
        if let Err(error) = browser::set_cookie(&Session::login_cookie(token)) {
            tracing::error!(%error, "Could not store the session cookie");
        }
    }

    fn apply(&self, action: PageAction) {
        self.store.dispatch(StoreAction::Page(action));
    }
}

/// Hook giving a component its page host
#[hook]
pub fn use_page_host() -> BrowserHost {
    let store = use_reducer(PageStore::default);
    BrowserHost { store }
}

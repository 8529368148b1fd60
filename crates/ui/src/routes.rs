use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::IndexView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", IndexView)] Index {},
}

//! Routing definitions for the Windrose UI.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[at("/admin/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

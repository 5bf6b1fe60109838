//! Routing definitions for the CIF Desk UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Customers,
    #[at("/approval")]
    Approval,
    #[at("/reports")]
    Reports,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

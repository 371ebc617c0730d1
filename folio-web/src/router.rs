use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/skills")]
    Skills,
    #[at("/contact")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The five navigable pages in navbar order.
    pub const NAV: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];
}

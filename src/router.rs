use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::feed::FeedPage;
use crate::components::not_found::NotFound;
use crate::components::profile::ProfilePage;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Feed,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(selected_route: &Route) -> Html {
    match selected_route {
        Route::Feed => html! {<FeedPage />},
        Route::Profile => html! {<ProfilePage />},
        Route::NotFound => html! {<NotFound />},
    }
}

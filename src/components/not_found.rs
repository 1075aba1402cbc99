use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        |_| {
            log::warn!("404: user attempted to access a route that does not exist");
            || ()
        },
        (),
    );

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{"404"}</h1>
                <p class="text-xl text-gray-600 mb-4">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Feed} classes={classes!("text-blue-500", "hover:text-blue-700", "underline")}>
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::User;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_sign_out: Callback<()>,
}

fn nav_classes(active: bool) -> Classes {
    let state = if active {
        "bg-blue-50 text-blue-700"
    } else {
        "text-gray-600 hover:text-gray-900"
    };
    classes!("flex", "items-center", "px-3", "py-2", "rounded-lg", "transition-all", state)
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let route = use_route::<Route>();
    let is_active = |target: Route| route == Some(target);
    let sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <header class="border-b border-gray-200 bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <Link<Route> to={Route::Feed} classes={classes!("text-2xl", "font-bold", "text-blue-600")}>
                    {"PeerPals"}
                </Link<Route>>

                <nav class="hidden md:flex items-center space-x-6">
                    <Link<Route> to={Route::Feed} classes={nav_classes(is_active(Route::Feed))}>
                        {"🏠 Feed"}
                    </Link<Route>>
                    <Link<Route> to={Route::Profile} classes={nav_classes(is_active(Route::Profile))}>
                        {"👤 Profile"}
                    </Link<Route>>
                </nav>

                <div class="flex items-center space-x-4">
                    <div class="flex items-center space-x-2">
                        <div class="w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center font-bold text-sm">
                            {props.user.initial()}
                        </div>
                        <span class="hidden sm:inline text-sm font-medium">{props.user.name.clone()}</span>
                    </div>
                    <button
                        onclick={sign_out}
                        class="p-2 rounded-lg text-gray-600 hover:text-gray-900 transition-colors"
                        title="Sign out"
                    >
                        {"⎋"}
                    </button>
                </div>
            </div>
        </header>
    }
}

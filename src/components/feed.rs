use yew::prelude::*;

use crate::app::FeedContext;
use crate::components::post_creator::PostCreator;
use crate::components::post_feed::PostFeed;

#[function_component(FeedPage)]
pub fn feed_page() -> Html {
    let ctx = match use_context::<FeedContext>() {
        Some(ctx) => ctx,
        None => {
            log::warn!("feed rendered outside of FeedContext");
            return html! {};
        }
    };
    let user = match ctx.state.session.current_user() {
        Some(user) => user.clone(),
        None => return html! {},
    };

    html! {
        <main class="container mx-auto px-4 py-8 max-w-2xl">
            <div class="space-y-6">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold mb-2">
                        {format!("Welcome back, {}!", user.first_name())}
                    </h1>
                    <p class="text-gray-500">{"Share your thoughts with the professional community"}</p>
                </div>
                <PostCreator
                    user={user}
                    max_chars={ctx.config.max_post_chars}
                    delay_ms={ctx.config.post_delay_ms}
                    on_post_created={ctx.on_post.clone()}
                />
                <PostFeed
                    posts={ctx.state.posts.list_all().to_vec()}
                    likes={ctx.state.likes.clone()}
                    on_like={ctx.on_like.clone()}
                />
            </div>
        </main>
    }
}

use chrono::Utc;
use yew::prelude::*;

use crate::models::user::initial_of;
use crate::models::{format_time_ago, Post, PostId};
use crate::state::LikeTracker;

#[derive(Properties, PartialEq)]
pub struct PostFeedProps {
    pub posts: Vec<Post>,
    pub likes: LikeTracker,
    pub on_like: Callback<PostId>,
}

#[function_component(PostFeed)]
pub fn post_feed(props: &PostFeedProps) -> Html {
    if props.posts.is_empty() {
        return html! {
            <div class="bg-white rounded-lg shadow-sm text-center py-12">
                <p class="text-gray-500">{"No posts yet. Be the first to share something!"}</p>
            </div>
        };
    }

    let now = Utc::now();
    html! {
        <div class="space-y-4">
            {
                props.posts.iter().map(|post| {
                    let liked = props.likes.is_liked(post.id());
                    let onclick = {
                        let id = post.id().clone();
                        let on_like = props.on_like.clone();
                        Callback::from(move |_: MouseEvent| on_like.emit(id.clone()))
                    };
                    let like_color = if liked { "text-red-500 hover:text-red-600" } else { "text-gray-500 hover:text-gray-900" };

                    html! {
                        <div key={post.id().to_string()} class="bg-white rounded-lg shadow-sm border border-gray-200 hover:shadow-md transition-shadow p-4">
                            <div class="flex items-start space-x-3 mb-3">
                                <div class="w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-bold">
                                    {initial_of(post.author())}
                                </div>
                                <div class="flex-1">
                                    <div class="flex items-center space-x-2">
                                        <h3 class="font-semibold text-sm">{post.author()}</h3>
                                        <span class="text-xs text-gray-500">{"•"}</span>
                                        <span class="text-xs text-gray-500">{format_time_ago(post.created_at(), now)}</span>
                                    </div>
                                    <p class="text-xs text-gray-500">{"Professional"}</p>
                                </div>
                            </div>
                            <p class="text-sm leading-relaxed mb-4">{post.content()}</p>
                            <div class="flex items-center justify-between pt-2 border-t border-gray-100">
                                <button onclick={onclick} class={classes!("h-8", "px-3", "rounded", like_color)}>
                                    { if liked { "♥" } else { "♡" } }
                                    <span class="ml-1 text-xs">{props.likes.effective_like_count(post)}</span>
                                </button>
                                <div class="flex items-center space-x-1 text-gray-500">
                                    <span class="h-8 px-3 text-xs">{format!("💬 {}", post.base_comments())}</span>
                                    <span class="h-8 px-3 text-xs">{"↗"}</span>
                                </div>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

use yew::prelude::*;

use crate::app::FeedContext;
use crate::models::{Post, User};

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub user: User,
    /// Posts written by `user`, newest first.
    pub posts: Vec<Post>,
    pub recent_limit: usize,
    #[prop_or(true)]
    pub is_own_profile: bool,
}

fn stat(value: usize, label: &'static str) -> Html {
    html! {
        <div>
            <div class="text-2xl font-bold text-blue-600">{value}</div>
            <div class="text-sm text-gray-500">{label}</div>
        </div>
    }
}

#[function_component(Profile)]
pub fn profile(props: &ProfileProps) -> Html {
    let user = &props.user;
    let recent: Vec<&Post> = props.posts.iter().take(props.recent_limit).collect();
    let last = recent.len().saturating_sub(1);

    html! {
        <div class="max-w-4xl mx-auto space-y-6">
            <div class="bg-white rounded-lg shadow-lg border border-gray-200 p-6">
                <div class="flex items-start space-x-6">
                    <div class="w-24 h-24 rounded-full bg-blue-600 text-white flex items-center justify-center text-2xl font-bold">
                        {user.initial()}
                    </div>
                    <div class="flex-1">
                        <div class="flex items-start justify-between">
                            <div>
                                <h1 class="text-3xl font-bold">{user.name.clone()}</h1>
                                <p class="text-lg text-gray-500 mt-1">{user.bio_or_default()}</p>
                            </div>
                            if props.is_own_profile {
                                <button class="px-3 py-1 border border-gray-200 rounded-lg text-sm">{"✎ Edit Profile"}</button>
                            }
                        </div>
                        <div class="flex items-center space-x-4 mt-4 text-sm text-gray-500">
                            <span>{format!("✉ {}", user.email)}</span>
                            if let Some(location) = &user.location {
                                <span>{format!("📍 {}", location)}</span>
                            }
                            <span>{format!("📅 Joined {}", user.joined_label())}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                <div class="grid grid-cols-3 gap-6 text-center">
                    {stat(props.posts.len(), "Posts")}
                    {stat(0, "Connections")}
                    {stat(0, "Following")}
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">{"Recent Posts"}</h2>
                    <span class="bg-gray-100 text-xs px-2 py-1 rounded-full">{props.posts.len()}</span>
                </div>
                if recent.is_empty() {
                    <div class="text-center py-8">
                        <p class="text-gray-500">{"No posts yet."}</p>
                        if props.is_own_profile {
                            <p class="text-sm text-gray-500 mt-2">{"Share your first post to get started!"}</p>
                        }
                    </div>
                } else {
                    <div class="space-y-4">
                        {
                            recent.iter().enumerate().map(|(index, post)| html! {
                                <div key={post.id().to_string()}>
                                    <div class="flex items-start space-x-3">
                                        <div class="w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center text-xs font-bold">
                                            {user.initial()}
                                        </div>
                                        <div class="flex-1">
                                            <div class="flex items-center space-x-2 mb-1">
                                                <span class="text-sm font-medium">{user.name.clone()}</span>
                                                <span class="text-xs text-gray-500">
                                                    {post.created_at().format("%-m/%-d/%Y").to_string()}
                                                </span>
                                            </div>
                                            <p class="text-sm leading-relaxed">{post.content()}</p>
                                        </div>
                                    </div>
                                    if index < last {
                                        <hr class="my-4 border-gray-100" />
                                    }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let ctx = match use_context::<FeedContext>() {
        Some(ctx) => ctx,
        None => {
            log::warn!("profile rendered outside of FeedContext");
            return html! {};
        }
    };
    let user = match ctx.state.session.current_user() {
        Some(user) => user.clone(),
        None => return html! {},
    };
    let posts = ctx.state.posts.list_by_author(&user.name);

    html! {
        <main class="container mx-auto px-4 py-8">
            <Profile user={user} posts={posts} recent_limit={ctx.config.profile_recent_posts} />
        </main>
    }
}

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::models::{can_submit, User};
use crate::services::timer;

#[derive(Properties, PartialEq)]
pub struct PostCreatorProps {
    pub user: User,
    pub max_chars: usize,
    pub delay_ms: u32,
    pub on_post_created: Callback<String>,
}

pub enum Msg {
    Edit(String),
    Submit,
    Settled,
}

pub struct PostCreator {
    content: String,
    is_loading: bool,
}

/// Builds the job that runs once the posting delay is over. The content goes
/// straight to `on_post_created`, which belongs to the root component, so the
/// post lands even if this form is gone by then; `on_settled` only resets the
/// form.
pub fn deferred_commit(
    content: String,
    on_post_created: Callback<String>,
    on_settled: impl FnOnce() + 'static,
) -> impl FnOnce() + 'static {
    move || {
        on_post_created.emit(content);
        on_settled();
    }
}

impl PostCreator {
    fn submittable(&self, max_chars: usize) -> bool {
        can_submit(&self.content, self.is_loading, max_chars)
    }
}

impl Component for PostCreator {
    type Message = Msg;
    type Properties = PostCreatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            content: String::new(),
            is_loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(content) => {
                self.content = content;
                true
            }
            Msg::Submit => {
                if !self.submittable(ctx.props().max_chars) {
                    return false;
                }
                self.is_loading = true;
                let link = ctx.link().clone();
                let commit = deferred_commit(
                    self.content.clone(),
                    ctx.props().on_post_created.clone(),
                    move || link.send_message(Msg::Settled),
                );
                timer::after(ctx.props().delay_ms, commit);
                true
            }
            Msg::Settled => {
                self.content.clear();
                self.is_loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Edit(input.value())
        });
        let len = self.content.chars().count();
        let counter_color = if len > props.max_chars { "text-red-500" } else { "text-gray-500" };

        html! {
            <div class="bg-white rounded-lg shadow-sm border border-gray-200">
                <div class="flex items-center space-x-3 p-4 pb-3">
                    <div class="w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-bold">
                        {props.user.initial()}
                    </div>
                    <div>
                        <p class="font-medium text-sm">{props.user.name.clone()}</p>
                        <p class="text-xs text-gray-500">{props.user.email.clone()}</p>
                    </div>
                </div>
                <form onsubmit={onsubmit} class="space-y-4 px-4 pb-4">
                    <textarea
                        oninput={oninput}
                        value={self.content.clone()}
                        rows="4"
                        placeholder="What's on your mind? Share your professional thoughts..."
                        class="w-full p-3 border border-gray-200 rounded-lg resize-none focus:border-blue-500"
                    />
                    <div class="flex justify-between items-center">
                        <span class={classes!("text-xs", counter_color)}>
                            {format!("{}/{} characters", len, props.max_chars)}
                        </span>
                        <button
                            type="submit"
                            disabled={!self.submittable(props.max_chars)}
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white rounded-lg font-medium transition-all"
                        >
                            { if self.is_loading { "Posting..." } else { "➤ Post" } }
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}

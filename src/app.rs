use std::rc::Rc;

use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};
use yew_router::prelude::*;

use crate::components::auth::Auth;
use crate::components::header::Header;
use crate::components::toaster::Toaster;
use crate::config::FeedConfig;
use crate::models::{Credentials, PostId};
use crate::router::{switch, Route};
use crate::services::event_bus::{EventBus, Request, Toast};
use crate::state::AppState;

/// What the routed pages need from the root: a snapshot of the state and
/// the callbacks that feed intents back into it.
#[derive(Clone, PartialEq)]
pub struct FeedContext {
    pub state: Rc<AppState>,
    pub config: Rc<FeedConfig>,
    pub on_post: Callback<String>,
    pub on_like: Callback<PostId>,
}

pub enum Msg {
    Authenticate(Credentials),
    SignOut,
    CreatePost(String),
    ToggleLike(PostId),
}

pub struct App {
    state: Rc<AppState>,
    config: Rc<FeedConfig>,
    toasts: Dispatcher<EventBus>,
    on_auth: Callback<Credentials>,
    on_sign_out: Callback<()>,
    on_post: Callback<String>,
    on_like: Callback<PostId>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = FeedConfig::default();
        let state = AppState::new(&config);
        Self {
            state: Rc::new(state),
            config: Rc::new(config),
            toasts: EventBus::dispatcher(),
            on_auth: ctx.link().callback(Msg::Authenticate),
            on_sign_out: ctx.link().callback(|_| Msg::SignOut),
            on_post: ctx.link().callback(Msg::CreatePost),
            on_like: ctx.link().callback(Msg::ToggleLike),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Authenticate(credentials) => {
                Rc::make_mut(&mut self.state)
                    .session
                    .authenticate(credentials);
                true
            }
            Msg::SignOut => {
                Rc::make_mut(&mut self.state).session.sign_out();
                true
            }
            Msg::CreatePost(content) => {
                let state = Rc::make_mut(&mut self.state);
                let author = match state.session.current_user() {
                    Some(user) => user.name.clone(),
                    None => {
                        log::warn!("post submitted without a session");
                        return false;
                    }
                };
                if state.posts.create_post(&author, &content).is_err() {
                    return false;
                }
                self.toasts.send(Request::Notify(Toast::new(
                    "Post shared!",
                    "Your post has been shared with the community.",
                )));
                true
            }
            Msg::ToggleLike(id) => {
                Rc::make_mut(&mut self.state).likes.toggle_like(&id);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let user = match self.state.session.current_user() {
            Some(user) => user.clone(),
            None => {
                return html! {
                    <>
                        <Toaster timeout_ms={self.config.toast_ms} />
                        <Auth on_auth={self.on_auth.clone()} />
                    </>
                };
            }
        };

        let context = FeedContext {
            state: self.state.clone(),
            config: self.config.clone(),
            on_post: self.on_post.clone(),
            on_like: self.on_like.clone(),
        };

        html! {
            <ContextProvider<FeedContext> context={context}>
                <BrowserRouter>
                    <div class="min-h-screen bg-gray-50">
                        <Toaster timeout_ms={self.config.toast_ms} />
                        <Header user={user} on_sign_out={self.on_sign_out.clone()} />
                        <Switch<Route> render={Switch::render(switch)} />
                    </div>
                </BrowserRouter>
            </ContextProvider<FeedContext>>
        }
    }
}

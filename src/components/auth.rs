use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Credentials;

#[derive(Properties, PartialEq)]
pub struct AuthProps {
    pub on_auth: Callback<Credentials>,
}

pub enum Msg {
    NameChanged(String),
    Submit,
}

/// Sign-in form. Nothing is checked against a backend: any name gets in.
pub struct Auth {
    name_input: NodeRef,
    email_input: NodeRef,
    bio_input: NodeRef,
    location_input: NodeRef,
    name: String,
}

impl Auth {
    fn read(input: &NodeRef) -> String {
        input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(Self::read(&self.name_input), Self::read(&self.email_input))
            .with_bio(Self::read(&self.bio_input))
            .with_location(Self::read(&self.location_input))
    }
}

impl Component for Auth {
    type Message = Msg;
    type Properties = AuthProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            name_input: NodeRef::default(),
            email_input: NodeRef::default(),
            bio_input: NodeRef::default(),
            location_input: NodeRef::default(),
            name: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => {
                let was_blank = self.name.trim().is_empty();
                self.name = name;
                was_blank != self.name.trim().is_empty()
            }
            Msg::Submit => {
                let credentials = self.credentials();
                if credentials.is_submittable() {
                    ctx.props().on_auth.emit(credentials);
                } else {
                    log::debug!("ignoring sign-in without a name");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: FocusEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::NameChanged(input.value())
        });
        let field = "w-full px-4 py-2 border border-gray-200 rounded-lg focus:ring-2 focus:ring-blue-500";

        html! {
            <div class="flex items-center justify-center min-h-screen bg-gray-50 px-4">
                <div class="w-full max-w-md bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-3xl font-bold text-blue-600 text-center mb-2">{"PeerPals"}</h1>
                    <p class="text-sm text-gray-600 text-center mb-6">
                        {"Connect with professionals and share your thoughts"}
                    </p>
                    <form onsubmit={onsubmit} class="space-y-4">
                        <input ref={self.name_input.clone()} oninput={oninput} type="text" placeholder="Full name" class={field} />
                        <input ref={self.email_input.clone()} type="email" placeholder="Email" class={field} />
                        <input ref={self.bio_input.clone()} type="text" placeholder="Headline (optional)" class={field} />
                        <input ref={self.location_input.clone()} type="text" placeholder="Location (optional)" class={field} />
                        <button
                            type="submit"
                            disabled={self.name.trim().is_empty()}
                            class="w-full py-2 bg-blue-600 hover:bg-blue-700 disabled:opacity-50 text-white rounded-lg font-medium transition-colors"
                        >
                            {"Sign in"}
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}

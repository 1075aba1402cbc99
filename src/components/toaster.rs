use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

use crate::services::event_bus::{EventBus, Toast};
use crate::services::timer;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub timeout_ms: u32,
}

pub enum Msg {
    Show(Toast),
    Dismiss(u64),
}

pub struct Toaster {
    toasts: Vec<(u64, Toast)>,
    next_id: u64,
    _producer: Box<dyn Bridge<EventBus>>,
}

impl Component for Toaster {
    type Message = Msg;
    type Properties = ToasterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            toasts: vec![],
            next_id: 0,
            _producer: EventBus::bridge(ctx.link().callback(Msg::Show)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(toast) => {
                let id = self.next_id;
                self.next_id += 1;
                self.toasts.push((id, toast));
                let link = ctx.link().clone();
                timer::after(ctx.props().timeout_ms, move || link.send_message(Msg::Dismiss(id)));
                true
            }
            Msg::Dismiss(id) => {
                let before = self.toasts.len();
                self.toasts.retain(|(toast_id, _)| *toast_id != id);
                before != self.toasts.len()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="fixed bottom-4 right-4 z-50 space-y-2">
                {
                    self.toasts.iter().map(|(id, toast)| {
                        let id = *id;
                        let dismiss = ctx.link().callback(move |_: MouseEvent| Msg::Dismiss(id));
                        html! {
                            <div key={id.to_string()} onclick={dismiss} class="w-80 p-4 bg-white border border-gray-200 rounded-lg shadow-lg cursor-pointer">
                                <div class="font-semibold text-sm">{toast.title.clone()}</div>
                                <div class="text-sm text-gray-600">{toast.description.clone()}</div>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    }
}

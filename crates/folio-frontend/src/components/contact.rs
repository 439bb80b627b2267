use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use folio::config::{CONTACT_SUCCESS_DISPLAY, as_millis};
use folio::contact::{ContactAction, ContactField, ContactState, SubmitStatus};
use folio::log::{info, warn};
use folio::service::PortfolioService;

use crate::providers::{api, use_theme};

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50";

#[derive(Default)]
struct ContactReducer(ContactState);

impl Reducible for ContactReducer {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let service = use_memo((), |_| api::create());
    let state = use_reducer(ContactReducer::default);

    let on_input = |field: ContactField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            dispatcher.dispatch(ContactAction::Edit(field, value));
        })
    };

    let on_message_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            dispatcher.dispatch(ContactAction::Edit(ContactField::Message, value));
        })
    };

    let on_submit = {
        let service = service.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.0.is_sending() {
                return;
            }

            let message = state.0.form.to_message();
            let confirmation = state.0.next_confirmation();
            let dispatcher = state.dispatcher();
            let service = service.clone();
            dispatcher.dispatch(ContactAction::Submitting);

            wasm_bindgen_futures::spawn_local(async move {
                let result = service.send_contact(&message).await;
                let sent = result.is_ok();
                match &result {
                    Ok(()) => info!("Contact message sent"),
                    Err(err) => warn!("Contact message failed: {err}"),
                }
                dispatcher.dispatch(ContactAction::Finished(result));

                if sent {
                    Timeout::new(as_millis(CONTACT_SUCCESS_DISPLAY), move || {
                        dispatcher.dispatch(ContactAction::DismissSuccess(confirmation));
                    })
                    .forget();
                }
            });
        })
    };

    let sending = state.0.is_sending();
    let form = &state.0.form;

    html! {
        <section id="contact" class={classes!("contact", theme.theme.as_str(), "py-20", "px-4", "bg-gray-50", "dark:bg-gray-800/50")}>
            <div class="max-w-xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-2">{ "Get In Touch" }</h2>
                <p class="text-center text-gray-600 dark:text-gray-400 mb-8">
                    { "Have a question or want to work together? Feel free to reach out!" }
                </p>

                <form onsubmit={on_submit} class="space-y-4">
                    if state.0.status == SubmitStatus::Sent {
                        <div class="p-3 bg-green-50 border border-green-200 rounded-md text-sm text-green-700">
                            { "✓ Message sent successfully!" }
                        </div>
                    }
                    if let Some(error) = state.0.error() {
                        <div class="p-3 bg-red-50 border border-red-200 rounded-md text-sm text-red-700">
                            { format!("✗ {error}") }
                        </div>
                    }

                    <input
                        type="text"
                        name="name"
                        class={INPUT_CLASSES}
                        placeholder="Your Name"
                        value={form.name.clone()}
                        oninput={on_input(ContactField::Name)}
                        required={true}
                        disabled={sending}
                    />
                    <input
                        type="email"
                        name="email"
                        class={INPUT_CLASSES}
                        placeholder="Your Email"
                        value={form.email.clone()}
                        oninput={on_input(ContactField::Email)}
                        required={true}
                        disabled={sending}
                    />
                    <input
                        type="tel"
                        name="phone"
                        class={INPUT_CLASSES}
                        placeholder="Your Phone (Optional)"
                        value={form.phone.clone()}
                        oninput={on_input(ContactField::Phone)}
                        disabled={sending}
                    />
                    <input
                        type="text"
                        name="subject"
                        class={INPUT_CLASSES}
                        placeholder="Subject"
                        value={form.subject.clone()}
                        oninput={on_input(ContactField::Subject)}
                        required={true}
                        disabled={sending}
                    />
                    <textarea
                        name="message"
                        class={INPUT_CLASSES}
                        placeholder="Your Message"
                        rows="5"
                        value={form.message.clone()}
                        oninput={on_message_input}
                        required={true}
                        disabled={sending}
                    />

                    <button
                        type="submit"
                        class="w-full px-4 py-2 text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={sending}
                    >
                        { if sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </div>
        </section>
    }
}

use yew::prelude::*;

use folio::dashboard::{attended_label, toggle_label};
use folio::data::ContactMessage;

use super::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct MessageDetailProps {
    pub message: ContactMessage,
    pub on_back: Callback<()>,
    pub on_toggle_attended: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(MessageDetail)]
pub fn message_detail(props: &MessageDetailProps) -> Html {
    let message = &props.message;
    let on_back = props.on_back.reform(|_: MouseEvent| ());
    let on_toggle = props.on_toggle_attended.reform(|_: MouseEvent| ());
    let on_delete = props.on_delete.reform(|_: MouseEvent| ());

    html! {
        <div class="space-y-4">
            <button class="px-3 py-1.5 text-sm rounded-md border border-gray-300 dark:border-gray-600" onclick={on_back}>
                { "← Back to Messages" }
            </button>
            <div class="p-6 bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl">
                <h3 class="text-lg font-semibold">{ &message.subject }</h3>
                <span class={classes!(
                    "inline-block", "mt-2", "px-2", "py-0.5", "text-xs", "rounded",
                    if message.attended { "bg-green-100 text-green-800" } else { "bg-yellow-100 text-yellow-800" }
                )}>
                    { attended_label(message.attended) }
                </span>
                <div class="mt-4 space-y-1 text-sm">
                    <p><strong>{ "From: " }</strong>{ &message.name }</p>
                    <p>
                        <strong>{ "Email: " }</strong>
                        <a href={format!("mailto:{}", message.email)} class="text-blue-600 hover:underline">{ &message.email }</a>
                    </p>
                    if let Some(phone) = message.phone() {
                        <p><strong>{ "Phone: " }</strong>{ phone }</p>
                    }
                    <p><strong>{ "Date: " }</strong>{ format_timestamp(message.created_at.as_ref()) }</p>
                </div>
                <div class="mt-4">
                    <h4 class="font-medium mb-1">{ "Message:" }</h4>
                    <p class="whitespace-pre-wrap">{ &message.message }</p>
                </div>
                <div class="mt-6 flex gap-2">
                    <button class="px-4 py-2 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-700" onclick={on_toggle}>
                        { toggle_label(message.attended) }
                    </button>
                    <button class="px-4 py-2 text-sm rounded-md bg-red-600 text-white hover:bg-red-700" onclick={on_delete}>
                        { "Delete Message" }
                    </button>
                </div>
            </div>
        </div>
    }
}

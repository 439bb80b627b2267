use yew::prelude::*;

use folio::config::PREVIEW_CHARS;
use folio::data::ContactMessage;
use folio::text::preview;

use super::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ContactMessage>,
    pub on_select: Callback<ContactMessage>,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    html! {
        <div class="space-y-3">
            { for props.messages.iter().map(|message| {
                let onclick = {
                    let message = message.clone();
                    props.on_select.reform(move |_: MouseEvent| message.clone())
                };
                let badge = if message.attended {
                    "text-green-600 dark:text-green-400"
                } else {
                    "text-yellow-600 dark:text-yellow-400"
                };

                html! {
                    <div key={message.id.to_string()} {onclick} class="p-4 cursor-pointer bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg hover:border-blue-500">
                        <div class="flex items-center justify-between">
                            <h4 class="font-semibold">{ &message.subject }</h4>
                            <span class={classes!("text-sm", badge)}>{ if message.attended { "✓" } else { "○" } }</span>
                        </div>
                        <p class="text-sm"><strong>{ &message.name }</strong>{ format!(" ({})", message.email) }</p>
                        <p class="text-sm text-gray-600 dark:text-gray-400">{ preview(&message.message, PREVIEW_CHARS) }</p>
                        <p class="text-xs text-gray-500 mt-1">{ format_timestamp(message.created_at.as_ref()) }</p>
                    </div>
                }
            }) }
        </div>
    }
}

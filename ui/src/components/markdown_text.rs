//! Renders the AI analysis markdown safely.
//!
//! The text goes through the constrained subset renderer and then the
//! tag allow-list sanitizer before injection; this component is the only
//! place rendered markup reaches the document.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The markdown-like AI analysis text.
    pub text: AttrValue,
    /// Additional CSS classes for the container.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn MarkdownText(props: &Props) -> Html {
    let html_content = ai_markdown::render_sanitized(&props.text);

    let base_classes = classes!(
        "prose",
        "prose-neutral",
        "dark:prose-invert",
        "prose-sm",
        "max-w-none",
        "prose-p:my-2",
        "prose-ul:my-2",
        "prose-ol:my-2",
        "prose-li:my-0",
        props.class.clone()
    );

    html! {
        <div class={base_classes}>
            { Html::from_html_unchecked(html_content.into()) }
        </div>
    }
}

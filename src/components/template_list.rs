//! Template picker: fixed preset questions that overwrite the query input.

use leptos::prelude::*;

use crate::state::query::TEMPLATES;

/// Preset buttons for the analyze sidebar. Selecting one only overwrites
/// the question text; submission stays a separate action.
#[component]
pub fn TemplateList(on_select: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="template-section">
            {TEMPLATES
                .iter()
                .map(|tpl| {
                    let question = tpl.question;
                    view! {
                        <button class="template-button" on:click=move |_| on_select.run(question)>
                            {tpl.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

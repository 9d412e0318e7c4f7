//! Reclamation (complaint) form.

#[cfg(test)]
#[path = "reclamation_test.rs"]
mod reclamation_test;

use leptos::prelude::*;

use crate::components::route_guard::RequireAuth;

/// Trim both fields and require them.
fn validate_reclamation_input(
    subject: &str,
    message: &str,
) -> Result<(String, String), &'static str> {
    let subject = subject.trim();
    let message = message.trim();
    if subject.is_empty() || message.is_empty() {
        return Err("Enter a subject and a message.");
    }
    Ok((subject.to_owned(), message.to_owned()))
}

#[component]
pub fn ReclamationPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ReclamationForm/>
        </RequireAuth>
    }
}

/// Complaint form — submits to the reclamation endpoint and reports the
/// outcome inline.
#[component]
fn ReclamationForm() -> impl IntoView {
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (subject_value, message_value) =
            match validate_reclamation_input(&subject.get(), &message.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_reclamation(&subject_value, &message_value).await {
                Ok(()) => {
                    subject.set(String::new());
                    message.set(String::new());
                    info.set("Your reclamation has been sent.".to_owned());
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (subject_value, message_value);
            busy.set(false);
        }
    };

    view! {
        <div class="reclamation-page">
            <div class="reclamation-card">
                <h1>"Reclamation"</h1>
                <p class="reclamation-card__subtitle">
                    "Tell us what went wrong. The board reads every submission."
                </p>
                <Show when=move || !info.get().is_empty()>
                    <p class="reclamation-message">{move || info.get()}</p>
                </Show>
                <form class="reclamation-form" on:submit=on_submit>
                    <input
                        class="reclamation-input"
                        type="text"
                        placeholder="Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                    <textarea
                        class="reclamation-textarea"
                        placeholder="Describe the problem"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="reclamation-button"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

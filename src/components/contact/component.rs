//! Contact form view with simulated submission.

use leptos::prelude::*;
use log::{info, warn};
use web_sys::SubmitEvent;

use super::form::{ContactForm, Field, FormEvent, SUBMIT_DELAY, SUCCESS_DISPLAY, SubmitStatus};

fn placeholder(field: Field) -> &'static str {
	match field {
		Field::Name => "Your name",
		Field::Email => "your.email@example.com",
		Field::Subject => "What's this about?",
		Field::Message => "Tell me about your project or just say hello!",
	}
}

fn label(field: Field) -> &'static str {
	match field {
		Field::Name => "Name",
		Field::Email => "Email",
		Field::Subject => "Subject",
		Field::Message => "Message",
	}
}

/// "Send a Message" form. Nothing is transmitted; timers stand in for the send.
#[component]
pub fn ContactFormPanel() -> impl IntoView {
	let form = RwSignal::new(ContactForm::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		match form.try_update(ContactForm::begin_submit) {
			Some(Ok(())) => {
				error.set(None);
				info!("contact: sending message (simulated)");
				// Timers may outlive the page; try_update ignores disposed signals.
				set_timeout(
					move || {
						form.try_update(ContactForm::finish_submit);
						set_timeout(
							move || {
								form.try_update(ContactForm::acknowledge);
							},
							SUCCESS_DISPLAY,
						);
					},
					SUBMIT_DELAY,
				);
			}
			Some(Err(e)) => {
				warn!("contact: submit refused: {}", e);
				error.set(Some(e.to_string()));
			}
			None => {}
		}
	};

	let input = move |field: Field| {
		let value = move || form.with(|f| f.value(field).to_string());
		let changed = move |value: String| {
			form.update(|f| f.apply(FormEvent::FieldChanged { field, value }))
		};
		let control = if field == Field::Message {
			view! {
				<textarea
					id=field.name()
					name=field.name()
					rows=6
					required=true
					class="form-input resize-none"
					placeholder=placeholder(field)
					prop:value=value
					on:input=move |ev| changed(event_target_value(&ev))
				/>
			}
			.into_any()
		} else {
			let kind = if field == Field::Email { "email" } else { "text" };
			view! {
				<input
					type=kind
					id=field.name()
					name=field.name()
					required=true
					class="form-input"
					placeholder=placeholder(field)
					prop:value=value
					on:input=move |ev| changed(event_target_value(&ev))
				/>
			}
			.into_any()
		};
		view! {
			<div>
				<label for=field.name() class="form-label">{label(field)}</label>
				{control}
			</div>
		}
	};

	let submitting = move || form.with(ContactForm::is_submitting);

	view! {
		<form class="contact-form" on:submit=on_submit>
			{Field::ALL.into_iter().map(input).collect_view()}
			<button type="submit" class="btn-primary w-full" disabled=submitting>
				{move || if submitting() { "Sending..." } else { "Send Message" }}
			</button>
			{move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
			<Show when=move || form.with(|f| f.status() == SubmitStatus::Success)>
				<div class="form-success">
					"✓ Message sent successfully! I'll get back to you soon."
				</div>
			</Show>
		</form>
	}
}

//! Contact form state and its simulated submission.
//!
//! Submission never leaves the page: the view moves the form through
//! `Submitting` and `Success` on timers and back to `Idle`.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Time spent in `Submitting` before the fake send completes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success notice stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

/// The four inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
	Name,
	Email,
	Subject,
	Message,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

	/// Form control name/id.
	pub fn name(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Email => "email",
			Field::Subject => "subject",
			Field::Message => "message",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Input events the form reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
	FieldChanged { field: Field, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Submitting,
	Success,
}

/// Reasons a submit is refused.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
	#[error("{0} is required")]
	MissingField(Field),

	#[error("email address is not valid")]
	InvalidEmail,

	#[error("a message is already being sent")]
	AlreadySubmitting,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
	status: SubmitStatus,
}

impl ContactForm {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn status(&self) -> SubmitStatus {
		self.status
	}

	pub fn is_submitting(&self) -> bool {
		self.status == SubmitStatus::Submitting
	}

	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Subject => &self.subject,
			Field::Message => &self.message,
		}
	}

	pub fn apply(&mut self, event: FormEvent) {
		match event {
			FormEvent::FieldChanged { field, value } => *self.slot(field) = value,
		}
	}

	/// Validate and enter `Submitting`.
	pub fn begin_submit(&mut self) -> Result<(), FormError> {
		if self.is_submitting() {
			return Err(FormError::AlreadySubmitting);
		}
		self.validate()?;
		self.status = SubmitStatus::Submitting;
		Ok(())
	}

	/// Complete a pending submit: show success and clear the inputs.
	pub fn finish_submit(&mut self) {
		if self.is_submitting() {
			*self = Self {
				status: SubmitStatus::Success,
				..Self::default()
			};
		}
	}

	/// Dismiss the success notice.
	pub fn acknowledge(&mut self) {
		if self.status == SubmitStatus::Success {
			self.status = SubmitStatus::Idle;
		}
	}

	pub fn validate(&self) -> Result<(), FormError> {
		if let Some(field) = Field::ALL
			.into_iter()
			.find(|f| self.value(*f).trim().is_empty())
		{
			return Err(FormError::MissingField(field));
		}
		if !looks_like_email(self.email.trim()) {
			return Err(FormError::InvalidEmail);
		}
		Ok(())
	}

	fn slot(&mut self, field: Field) -> &mut String {
		match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Subject => &mut self.subject,
			Field::Message => &mut self.message,
		}
	}
}

fn looks_like_email(s: &str) -> bool {
	match s.split_once('@') {
		Some((local, domain)) => {
			!local.is_empty()
				&& !domain.contains('@')
				&& !s.contains(char::is_whitespace)
				&& domain
					.split_once('.')
					.is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn filled() -> ContactForm {
		let mut form = ContactForm::new();
		for (field, value) in [
			(Field::Name, "Ada"),
			(Field::Email, "ada@example.com"),
			(Field::Subject, "Hello"),
			(Field::Message, "Nice site"),
		] {
			form.apply(FormEvent::FieldChanged {
				field,
				value: value.into(),
			});
		}
		form
	}

	#[test]
	fn field_changes_are_last_write_wins() {
		let mut form = ContactForm::new();
		form.apply(FormEvent::FieldChanged {
			field: Field::Subject,
			value: "first".into(),
		});
		form.apply(FormEvent::FieldChanged {
			field: Field::Subject,
			value: "second".into(),
		});
		assert_eq!(form.value(Field::Subject), "second");
		assert_eq!(form.value(Field::Name), "");
	}

	#[test]
	fn submit_runs_through_submitting_success_idle() {
		let mut form = filled();
		assert_eq!(form.begin_submit(), Ok(()));
		assert_eq!(form.status(), SubmitStatus::Submitting);

		form.finish_submit();
		assert_eq!(form.status(), SubmitStatus::Success);
		assert_eq!(form.value(Field::Message), "");
		assert_eq!(form.value(Field::Email), "");

		form.acknowledge();
		assert_eq!(form.status(), SubmitStatus::Idle);
	}

	#[test]
	fn double_submit_is_refused() {
		let mut form = filled();
		form.begin_submit().unwrap();
		assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
	}

	#[test]
	fn every_field_is_required() {
		let mut form = filled();
		form.apply(FormEvent::FieldChanged {
			field: Field::Subject,
			value: "   ".into(),
		});
		assert_eq!(
			form.begin_submit(),
			Err(FormError::MissingField(Field::Subject))
		);
		assert_eq!(form.status(), SubmitStatus::Idle);
	}

	#[test]
	fn email_must_look_like_an_address() {
		for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com"] {
			let mut form = filled();
			form.email = bad.into();
			assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
		}
	}

	#[test]
	fn stray_timer_callbacks_do_not_change_status() {
		let mut form = filled();
		form.finish_submit();
		assert_eq!(form.status(), SubmitStatus::Idle);
		assert_eq!(form.value(Field::Name), "Ada");
		form.acknowledge();
		assert_eq!(form.status(), SubmitStatus::Idle);
	}

	#[test]
	fn errors_name_the_field() {
		assert_eq!(
			FormError::MissingField(Field::Email).to_string(),
			"email is required"
		);
	}
}

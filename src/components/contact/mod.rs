//! Contact form: typed field events and a timer-driven fake submission.

mod component;
pub mod form;

pub use component::ContactFormPanel;
pub use form::{ContactForm, Field, FormError, FormEvent, SubmitStatus};

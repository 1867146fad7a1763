//! Contact form slice.
//!
//! Intercepts submission, checks that every field is filled in and fakes a
//! successful send: the submit control is disabled and relabelled, then a reset
//! task restores it after a short delay. Nothing is transmitted.

use fam_kernel::domain::config::ContactConfig;
use fam_kernel::domain::constants::{CONTACT_FORM, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use fam_kernel::domain::form::FormSnapshot;
use fam_kernel::prelude::*;
use std::time::Duration;
use tracing::{debug, info};

/// A reset waiting to fire, with the label it will restore.
#[derive(Debug, Clone)]
struct PendingReset {
    task: TaskId,
    label: String,
}

/// Contact form feature state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    delay: Duration,
    sent_label: String,
    fallback_label: String,
    pending: Option<PendingReset>,
}

/// Initialize the contact form feature.
#[must_use]
pub fn init(config: &ContactConfig) -> ContactForm {
    info!(delay_ms = config.reset_delay_ms, "Contact slice initialized");
    ContactForm::new(config)
}

/// The form's first `button[type=submit]`.
fn submit_button(page: &Page, form: NodeId) -> Option<NodeId> {
    page.descendants(form, |el| el.tag() == "button" && el.attribute("type") == Some("submit"))
        .next()
}

/// Trimmed field values at the moment of submission.
#[must_use]
pub fn snapshot(page: &Page, form: NodeId) -> FormSnapshot {
    let field = |name: &str| page.form_value(form, name).unwrap_or_default();
    FormSnapshot::new(field(FIELD_NAME), field(FIELD_EMAIL), field(FIELD_MESSAGE))
}

impl ContactForm {
    #[must_use]
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.reset_delay_ms),
            sent_label: config.sent_label.clone(),
            fallback_label: config.fallback_label.clone(),
            pending: None,
        }
    }

    /// Handle of the reset currently waiting to fire.
    #[must_use]
    pub fn pending(&self) -> Option<TaskId> {
        self.pending.as_ref().map(|pending| pending.task)
    }

    fn submit(&mut self, page: &Page, form: NodeId, ctx: &mut Context<'_>) -> Vec<Effect> {
        if !snapshot(page, form).is_complete() {
            debug!("Contact form incomplete, submission ignored");
            return Vec::new();
        }
        let Some(button) = submit_button(page, form) else {
            debug!("Contact form has no submit control");
            return Vec::new();
        };

        // A reset still in flight owns the real label; the button shows the sent one.
        let label = match self.pending.take() {
            Some(previous) if ctx.scheduler().cancel(previous.task) => previous.label,
            _ => page.text(button).unwrap_or_default().to_owned(),
        };
        let restored = if label.is_empty() { self.fallback_label.clone() } else { label.clone() };

        let task = ctx.scheduler().schedule(form, self.delay, vec![
            Effect::ResetForm { node: form },
            Effect::SetText { node: button, text: restored },
            Effect::SetDisabled { node: button, disabled: false },
        ]);
        debug!(?task, "Contact form sent, reset scheduled");
        self.pending = Some(PendingReset { task, label });

        vec![
            Effect::SetDisabled { node: button, disabled: true },
            Effect::SetText { node: button, text: self.sent_label.clone() },
        ]
    }
}

impl Feature for ContactForm {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Contact
    }

    fn on_ready(&mut self, page: &Page, _ctx: &mut Context<'_>) -> Vec<Effect> {
        if page.by_id(CONTACT_FORM).is_none() {
            debug!("Contact form markup missing, slice disabled");
        }
        Vec::new()
    }

    fn on_event(&mut self, page: &Page, event: &PageEvent, ctx: &mut Context<'_>) -> Vec<Effect> {
        match event {
            PageEvent::Submit { form } if page.by_id(CONTACT_FORM) == Some(*form) => {
                self.submit(page, *form, ctx)
            },
            PageEvent::Detached { .. } => {
                // The scheduler drops tasks of detached owners; forget ours with it.
                if let Some(pending) = &self.pending
                    && !ctx.scheduler().is_pending(pending.task)
                {
                    self.pending = None;
                }
                Vec::new()
            },
            _ => Vec::new(),
        }
    }
}

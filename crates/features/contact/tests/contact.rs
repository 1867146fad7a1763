use fam_contact::ContactForm;
use fam_kernel::domain::config::ContactConfig;
use fam_kernel::prelude::*;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(1400);

struct Fixture {
    page: Page,
    scheduler: Scheduler,
    contact: ContactForm,
    form: NodeId,
    fields: [NodeId; 3],
    button: NodeId,
}

impl Fixture {
    fn new(label: &str) -> Self {
        let mut page = Page::default();
        let body = page.body();
        let form = page.append(body, Element::new("form").with_id("contactForm"));
        let fields = ["name", "email", "message"]
            .map(|name| page.append(form, Element::new("input").with_name(name)));
        let button = page.append(
            form,
            Element::new("button").with_attribute("type", "submit").with_text(label),
        );
        Self { page, scheduler: Scheduler::new(), contact: ContactForm::new(&ContactConfig::default()), form, fields, button }
    }

    fn fill(&mut self, values: [&str; 3]) {
        for (node, value) in self.fields.into_iter().zip(values) {
            self.page.apply(Effect::SetValue { node, value: value.to_owned() });
        }
    }

    fn dispatch(&mut self, event: &PageEvent) {
        let mut ctx = Context::new(&mut self.scheduler, &SystemClock);
        let effects = self.contact.on_event(&self.page, event, &mut ctx);
        self.page.apply_all(effects);
    }

    fn submit(&mut self) {
        self.dispatch(&PageEvent::Submit { form: self.form });
    }

    fn advance(&mut self, by: Duration) {
        let effects = self.scheduler.advance(by);
        self.page.apply_all(effects);
    }

    fn button_state(&self) -> (bool, &str) {
        let el = self.page.element(self.button).expect("button exists");
        (el.is_disabled(), el.text())
    }

    fn values(&self) -> Vec<&str> {
        self.fields.iter().filter_map(|&node| self.page.element(node)).map(Element::value).collect()
    }
}

#[test]
fn incomplete_form_is_ignored() {
    for values in [["", "a@b.ee", "Tere"], ["Mari", "  ", "Tere"], ["Mari", "a@b.ee", "\n\t"]] {
        let mut fx = Fixture::new("Saada");
        fx.fill(values);
        fx.submit();

        assert_eq!(fx.button_state(), (false, "Saada"));
        assert_eq!(fx.scheduler.pending(), 0);
    }
}

#[test]
fn successful_submit_resets_after_delay() {
    let mut fx = Fixture::new("Saada");
    fx.fill([" Mari ", "mari@example.ee", "Tere!"]);
    fx.submit();

    assert_eq!(fx.button_state(), (true, "Saadetud ✓"));
    assert!(fx.contact.pending().is_some());

    fx.advance(DELAY - Duration::from_millis(1));
    assert_eq!(fx.button_state(), (true, "Saadetud ✓"));

    fx.advance(Duration::from_millis(1));
    assert_eq!(fx.button_state(), (false, "Saada"));
    assert_eq!(fx.values(), vec!["", "", ""]);
}

#[test]
fn empty_original_label_falls_back() {
    let mut fx = Fixture::new("");
    fx.fill(["Mari", "mari@example.ee", "Tere!"]);
    fx.submit();
    fx.advance(DELAY);

    assert_eq!(fx.button_state(), (false, "Saada"));
}

#[test]
fn resubmit_cancels_pending_reset_and_keeps_original_label() {
    let mut fx = Fixture::new("Send");
    fx.fill(["Mari", "mari@example.ee", "Tere!"]);
    fx.submit();
    let first = fx.contact.pending().expect("reset scheduled");

    fx.advance(Duration::from_millis(1000));
    fx.submit();
    let second = fx.contact.pending().expect("reset rescheduled");

    assert_ne!(first, second);
    assert!(!fx.scheduler.is_pending(first));
    assert_eq!(fx.scheduler.pending(), 1);

    // The first deadline passes without a reset.
    fx.advance(Duration::from_millis(400));
    assert_eq!(fx.button_state(), (true, "Saadetud ✓"));

    fx.advance(Duration::from_millis(1000));
    assert_eq!(fx.button_state(), (false, "Send"));
}

#[test]
fn detaching_the_form_cancels_the_reset() {
    let mut fx = Fixture::new("Saada");
    fx.fill(["Mari", "mari@example.ee", "Tere!"]);
    fx.submit();

    fx.page.apply(Effect::Detach { node: fx.form });
    assert_eq!(fx.scheduler.cancel_detached(&fx.page), 1);
    fx.dispatch(&PageEvent::Detached { node: fx.form });

    assert!(fx.contact.pending().is_none());
    assert!(fx.scheduler.advance(DELAY).is_empty());
}

#[test]
fn submits_of_other_forms_are_ignored() {
    let mut fx = Fixture::new("Saada");
    fx.fill(["Mari", "mari@example.ee", "Tere!"]);
    let body = fx.page.body();
    let other = fx.page.append(body, Element::new("form").with_id("newsletter"));

    fx.dispatch(&PageEvent::Submit { form: other });
    assert_eq!(fx.button_state(), (false, "Saada"));
}

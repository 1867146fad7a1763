use chrono::{Datelike, Local, TimeZone};
use fam_footer::FooterYear;
use fam_kernel::prelude::*;

fn page_with_year() -> (Page, NodeId) {
    let mut page = Page::default();
    let body = page.body();
    let footer = page.append(body, Element::new("footer"));
    let year = page.append(footer, Element::new("span").with_id("year"));
    (page, year)
}

#[test]
fn stamps_the_pinned_year() {
    let (mut page, year) = page_with_year();
    let clock = FixedClock(Local.with_ymd_and_hms(2031, 1, 1, 0, 0, 1).single().expect("valid instant"));
    let mut scheduler = Scheduler::new();
    let mut ctx = Context::new(&mut scheduler, &clock);

    let effects = FooterYear.on_ready(&page, &mut ctx);
    page.apply_all(effects);

    assert_eq!(page.text(year), Some("2031"));
}

#[test]
fn system_clock_year_has_four_digits() {
    let (mut page, year) = page_with_year();
    let mut scheduler = Scheduler::new();
    let mut ctx = Context::new(&mut scheduler, &SystemClock);

    let effects = FooterYear.on_ready(&page, &mut ctx);
    page.apply_all(effects);

    let expected = Local::now().year().to_string();
    let text = page.text(year).unwrap_or_default();
    assert_eq!(text.len(), 4);
    assert_eq!(text, expected);
}

#[test]
fn missing_year_node_is_a_no_op() {
    let page = Page::default();
    let mut scheduler = Scheduler::new();
    let mut ctx = Context::new(&mut scheduler, &SystemClock);
    assert!(FooterYear.on_ready(&page, &mut ctx).is_empty());
}

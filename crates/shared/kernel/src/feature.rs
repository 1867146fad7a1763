//! The contract every feature slice implements.

use crate::clock::Clock;
use crate::effect::Effect;
use crate::event::PageEvent;
use crate::page::Page;
use crate::scheduler::Scheduler;
use fam_domain::features::FeatureKind;
use std::fmt::Debug;

/// Services a feature may use while handling a trigger.
#[derive(Debug)]
pub struct Context<'a> {
    scheduler: &'a mut Scheduler,
    clock: &'a dyn Clock,
}

impl<'a> Context<'a> {
    pub fn new(scheduler: &'a mut Scheduler, clock: &'a dyn Clock) -> Self {
        Self { scheduler, clock }
    }

    pub const fn scheduler(&mut self) -> &mut Scheduler {
        self.scheduler
    }

    #[must_use]
    pub const fn clock(&self) -> &dyn Clock {
        self.clock
    }
}

/// A page feature: a pure reaction from a page snapshot to effects.
///
/// A feature whose required elements are missing returns no effects, ever.
pub trait Feature: Debug + Send {
    fn kind(&self) -> FeatureKind;

    /// Runs once when the page is ready.
    fn on_ready(&mut self, page: &Page, ctx: &mut Context<'_>) -> Vec<Effect>;

    /// Reacts to a host event. Most features listen to only a few.
    fn on_event(&mut self, page: &Page, event: &PageEvent, ctx: &mut Context<'_>) -> Vec<Effect> {
        let _ = (page, event, ctx);
        Vec::new()
    }
}

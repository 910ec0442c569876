pub mod page;
pub use page::*;

use std::{cell::RefCell, ops::Deref, rc::Rc};

use rusty_rocks::{Effect, ViewController};
use tracing::debug;

use crate::{browser, leaflet::LeafletMap};

pub struct State {
    pub controller: RefCell<ViewController<LeafletMap>>,
    pub page: Page,
}

/// Shared handle given to every event closure. The controller is only
/// borrowed for the duration of one transition, never while effects run.
#[derive(Clone)]
pub struct StateHandle(Rc<State>);

impl StateHandle {
    pub fn new(map: LeafletMap, page: Page) -> Self {
        Self(Rc::new(State {
            controller: RefCell::new(ViewController::new(map)),
            page,
        }))
    }

    /// Run one transition and apply what it asks of the page.
    pub fn dispatch(&self, transition: impl FnOnce(&mut ViewController<LeafletMap>) -> Vec<Effect>) {
        let effects = transition(&mut self.controller.borrow_mut());
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            debug!(?effect, "applying");
            match effect {
                Effect::RequestPosition => {
                    let on_fix = self.clone();
                    let on_err = self.clone();
                    browser::request_position(
                        move |pos| on_fix.dispatch(|c| c.position_acquired(pos)),
                        move |err| on_err.dispatch(|c| c.position_failed(err)),
                    );
                }
                Effect::Page(update) => self.page.apply(update),
            }
        }
    }
}

impl Deref for StateHandle {
    type Target = State;
    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

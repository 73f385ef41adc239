use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::schedule_update;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::toggle::ImageSources;
use crate::toggle::RenderScheduler;
use crate::toggle::ToggleController;
use crate::toggle::TogglePhase;

/// Handle to one component instance's toggle controller.
///
/// Cloning shares the same controller, so an event handler that captures a clone
/// always flips the state of the instance that created it.
#[derive(Clone)]
pub struct UseImageToggle {
    controller: Rc<RefCell<ToggleController<RenderScheduler>>>,
}

impl UseImageToggle {
    pub fn phase(&self) -> TogglePhase {
        self.controller.borrow().phase()
    }

    pub fn active_source(&self, sources: &ImageSources) -> String {
        self.controller.borrow().active_source(sources).to_owned()
    }

    /// Flips the source and schedules a re-render of the owning component.
    pub fn activate(&self) {
        let phase = self.controller.borrow_mut().on_activate();
        debug!("image toggle now {:?}", phase);
    }
}

/// Creates the toggle controller on first render and returns the same one afterwards.
pub fn use_image_toggle() -> UseImageToggle {
    use_hook(|| {
        let scheduler = RenderScheduler::new(schedule_update());
        let handle = UseImageToggle {
            controller: Rc::new(RefCell::new(ToggleController::new(scheduler))),
        };
        #[cfg(test)]
        created::record(&handle);
        handle
    })
}

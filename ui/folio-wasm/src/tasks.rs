//! Page-lifetime scheduled tasks.
//!
//! Long-running timers (`Interval`, `Timeout` chains) are held here by name
//! instead of being leaked. Dropping a handle cancels it, so replacing or
//! cancelling an entry stops the task.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static TASKS: RefCell<HashMap<&'static str, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Keep `handle` alive under `name`, cancelling whatever held that name before.
pub fn hold<H: Any>(name: &'static str, handle: H) {
    let previous = TASKS.with(|tasks| tasks.borrow_mut().insert(name, Box::new(handle)));
    // Dropped outside the borrow: a handle's drop may schedule more work.
    drop(previous);
}

/// Drop the task under `name`. Returns whether one was running.
pub fn cancel(name: &str) -> bool {
    let previous = TASKS.with(|tasks| tasks.borrow_mut().remove(name));
    previous.is_some()
}

pub fn is_held(name: &str) -> bool {
    TASKS.with(|tasks| tasks.borrow().contains_key(name))
}

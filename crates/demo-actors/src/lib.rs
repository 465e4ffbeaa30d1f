pub use action::{ActionDriverActor, ActionSubmitter, DemoSubmitter};
pub use watcher::{CounterEventsActor, CounterStateActor};

mod action;
mod watcher;

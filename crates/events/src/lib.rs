pub use demo_events::{ActionCommand, CounterEvents, TxLifecycleEvent};

mod demo_events;

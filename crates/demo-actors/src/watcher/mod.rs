pub use events::CounterEventsActor;
pub use state::CounterStateActor;

mod events;
mod state;

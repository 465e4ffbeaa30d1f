pub use driver::ActionDriverActor;
pub use submitter::{ActionSubmitter, DemoSubmitter};

mod driver;
mod submitter;

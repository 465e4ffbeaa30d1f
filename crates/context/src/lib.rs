pub use context::{DemoContext, DemoContracts};

mod context;

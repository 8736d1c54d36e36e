pub mod dispatcher;

pub use dispatcher::{DispatchPlan, Dispatcher};

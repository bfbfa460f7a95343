pub mod router;
pub mod screens;

pub use router::{Router, Screen, Transition};
pub use screens::FlowSession;

pub mod menu;
pub mod session;

pub use session::CounterSession;

pub mod basin;
pub mod error;
pub mod factory;
pub mod grid;
pub mod search;
pub mod state;
pub mod stat;
pub mod valve;

pub use error::SearchError;
pub use search::{DecisionSpace, StateSpace, TurnSpace};
pub use stat::Stats;

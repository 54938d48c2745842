//! Plain values produced by the parsers, before any search specific
//! processing.

mod edge;
mod heuristic_description;
mod heuristic_entry;
mod state_line;
mod state_name;
mod state_space_description;

pub use edge::Edge;
pub use heuristic_description::HeuristicDescription;
pub use heuristic_entry::HeuristicEntry;
pub use state_line::StateLine;
pub use state_name::StateName;
pub use state_space_description::StateSpaceDescription;

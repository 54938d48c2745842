mod graph_search;
mod search_engine;
mod search_statistics;

pub use graph_search::{GraphSearch, ReopeningPolicy};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult, Solution};
pub use search_statistics::SearchStatistics;

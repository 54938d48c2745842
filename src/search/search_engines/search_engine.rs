use crate::error::SearchError;
use crate::parsed_types::StateName;
use crate::search::{
    search_engines::{GraphSearch, ReopeningPolicy, SearchStatistics},
    BestScoreFrontier, Cost, FifoFrontier, Heuristic, MinCostFrontier, StatePath, StateSpace,
    ZeroHeuristic,
};
use serde::Serialize;
use strum_macros::{EnumIs, EnumIter};

/// A path to a goal together with its cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    path: StatePath,
    cost: Cost,
}

impl Solution {
    pub fn new(path: StatePath, cost: Cost) -> Self {
        Self { path, cost }
    }

    pub fn path(&self) -> &StatePath {
        &self.path
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchResult {
    /// A goal state was popped from the frontier
    Success(Solution),
    /// The frontier ran empty without reaching a goal state
    Unsolvable,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            SearchResult::Unsolvable => None,
        }
    }
}

pub trait SearchEngine {
    /// Search `state_space` from `start` until a goal state is expanded or
    /// the frontier runs empty.
    fn search(
        &mut self,
        state_space: &StateSpace,
        start: StateName,
        heuristic: &dyn Heuristic,
    ) -> Result<(SearchResult, SearchStatistics), SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfs", help = "Breadth-first search.")]
    Bfs,
    #[clap(name = "ucs", help = "Uniform-cost search.")]
    Ucs,
    #[clap(
        name = "astar",
        help = "A* search with node reopening, requires a heuristic file."
    )]
    Astar,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Bfs => {
                Box::new(GraphSearch::<FifoFrontier>::new(ReopeningPolicy::Never))
            }
            SearchEngineName::Ucs => {
                Box::new(GraphSearch::<MinCostFrontier>::new(ReopeningPolicy::Never))
            }
            SearchEngineName::Astar => Box::new(GraphSearch::<BestScoreFrontier>::new(
                ReopeningPolicy::OnCheaperPath,
            )),
        }
    }

    /// The name printed in the report header.
    pub fn label(&self) -> &'static str {
        match self {
            SearchEngineName::Bfs => "BFS",
            SearchEngineName::Ucs => "UCS",
            SearchEngineName::Astar => "A-STAR",
        }
    }

    pub fn uses_heuristic(&self) -> bool {
        matches!(self, SearchEngineName::Astar)
    }

    /// Run this engine from the start state of `state_space`. Engines that
    /// do not use a heuristic ignore `heuristic` and search with
    /// [`ZeroHeuristic`].
    pub fn search(
        &self,
        state_space: &StateSpace,
        heuristic: &dyn Heuristic,
    ) -> Result<(SearchResult, SearchStatistics), SearchError> {
        let zero = ZeroHeuristic::new();
        let heuristic: &dyn Heuristic = if self.uses_heuristic() {
            heuristic
        } else {
            &zero
        };
        self.create()
            .search(state_space, state_space.start(), heuristic)
    }
}

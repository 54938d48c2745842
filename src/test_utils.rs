//! Small state spaces and heuristics shared by the unit tests.

/// `A: B,1 C,4` and `B: C,1` with goal `C`. UCS finds `A => B => C` at cost
/// 2 while BFS takes the direct edge.
pub const TRIANGLE_STATE_SPACE_TEXT: &str = "\
# triangle
A
C
A: B,1 C,4
B: C,1
C:
";

pub const TRIANGLE_ZERO_HEURISTIC_TEXT: &str = "\
A: 0
B: 0
C: 0
";

/// The cheap route to `C` goes through `B`, which is generated after `A`
/// has already produced an expensive copy of `C`.
pub const DETOUR_STATE_SPACE_TEXT: &str = "\
# detour
S
G
S: A,1 B,2
A: C,4
B: C,1
C: G,2
G:
";

/// Overestimates at `B`, so A* closes `C` on the expensive route first and
/// has to reopen it.
pub const DETOUR_INCONSISTENT_HEURISTIC_TEXT: &str = "\
# overestimates at B
S: 0
A: 0
B: 4
C: 0
G: 0
";

/// The true cost to the goal from every state.
pub const DETOUR_OPTIMAL_HEURISTIC_TEXT: &str = "\
S: 5
A: 6
B: 3
C: 2
G: 0
";

/// Two routes of equal length to `D`, so BFS enqueues `D` twice.
pub const DIAMOND_STATE_SPACE_TEXT: &str = "\
A
E
A: B,1 C,1
B: D,1
C: D,1
D: E,1
";

/// `A` and `B` only reach each other, the goal `D` is only reachable from
/// `C`.
pub const UNREACHABLE_STATE_SPACE_TEXT: &str = "\
A
D
A: B,1
B: A,2
C: D,1
D:
";

pub const UNREACHABLE_ZERO_HEURISTIC_TEXT: &str = "\
# all zero

A: 0
B: 0
C: 0
D: 0
";

/// Actions an observer can take during a Strong Wolfe line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search and return the point that was just evaluated.
    StopEarly,
}

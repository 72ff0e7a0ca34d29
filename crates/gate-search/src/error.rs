use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no feasible departure tick in [0, {bound}); the configuration repeats beyond it")]
    Infeasible { bound: u64 },

    #[error("period LCM overflows u64; the search cannot be bounded")]
    BoundOverflow,
}

pub type SearchResult<T> = Result<T, SearchError>;

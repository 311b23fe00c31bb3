use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Strategy {
    /// Pick the cheaper facility day by day.
    #[default]
    Greedy,

    /// Minimize the total cost over the whole week, switching penalties included.
    Optimal,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

pub mod actor;
pub mod category;
pub mod episode;
pub mod program;
pub mod season;

pub use actor::Actor;
pub use category::Category;
pub use episode::{Episode, NewEpisode};
pub use program::{NewProgram, Program};
pub use season::{NewSeason, Season};

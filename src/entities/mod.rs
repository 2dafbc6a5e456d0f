pub mod prelude;

pub mod actor;
pub mod category;
pub mod episode;
pub mod program;
pub mod program_actor;
pub mod season;

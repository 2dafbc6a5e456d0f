pub mod actor;
pub mod category;
pub mod episode;
pub mod program;
pub mod season;

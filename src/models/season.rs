use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub id: i32,
    /// Season number within its program; not unique across programs.
    pub number: i32,
    pub description: String,
    pub year: i32,
    pub program_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewSeason {
    pub number: i32,
    pub description: String,
    pub year: i32,
    pub program_id: i32,
}

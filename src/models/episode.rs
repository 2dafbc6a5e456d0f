use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub id: i32,
    pub title: String,
    /// Episode number within its season.
    pub number: i32,
    pub synopsis: String,
    pub season_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewEpisode {
    pub title: String,
    pub number: i32,
    pub synopsis: String,
    pub season_id: i32,
}

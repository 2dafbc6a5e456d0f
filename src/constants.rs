pub mod catalogue {

    /// Programs shown per category page.
    pub const CATEGORY_PROGRAM_LIMIT: u64 = 3;
}

pub mod fixtures {

    pub const PROGRAM_REFERENCE: &str = "program";

    pub const SEASON_REFERENCE: &str = "season";

    pub const CATEGORY_REFERENCE: &str = "category";

    pub const EARLIEST_SEASON_YEAR: i32 = 1970;
}

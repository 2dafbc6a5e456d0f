mod fixtures;
mod init;

pub use fixtures::cmd_fixtures;
pub use init::cmd_init;

pub use super::actor::Entity as Actor;
pub use super::category::Entity as Category;
pub use super::episode::Entity as Episode;
pub use super::program::Entity as Program;
pub use super::program_actor::Entity as ProgramActor;
pub use super::season::Entity as Season;

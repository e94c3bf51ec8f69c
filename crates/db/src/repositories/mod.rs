//! One repository per collection.
//!
//! Repositories are stateless unit structs; every method takes the active
//! [`Store`](crate::Store) and works identically on either backend.

pub mod alert_repo;
pub mod site_repo;
pub mod toolbox_talk_repo;
pub mod user_repo;

pub use alert_repo::AlertRepo;
pub use site_repo::{SampleSeed, SiteRepo};
pub use toolbox_talk_repo::ToolboxTalkRepo;
pub use user_repo::UserRepo;

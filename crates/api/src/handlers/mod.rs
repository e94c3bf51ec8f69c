//! Request handlers.
//!
//! Each submodule provides async handler functions for one collection.
//! Handlers validate the request DTO, delegate to the corresponding
//! repository in `sara_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod alert;
pub mod site;
pub mod toolbox_talk;
pub mod user;

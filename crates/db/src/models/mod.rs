//! Entity records and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record stored in its collection and sent
//!   on the wire as-is (camelCase field names)
//! - `Deserialize` request DTOs whose fields are all optional, plus the
//!   validated input they convert into

pub mod alert;
pub mod site;
pub mod toolbox_talk;
pub mod user;

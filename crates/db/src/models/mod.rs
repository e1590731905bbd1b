//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus create/update DTOs where the table is written through a
//! repository. Read shapes assembled from joins live next to their entity.

pub mod expense;
pub mod page;
pub mod review;
pub mod spot;
pub mod token;
pub mod user;

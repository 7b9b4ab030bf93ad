//! Wire contracts shared by every screen of the hotel back-office.
//!
//! The structs here mirror the JSON shapes of the external REST API
//! (Spanish camelCase field names on the wire, see the serde renames).
//! Validation rules live next to the DTOs so list and form code agree
//! on what a submittable record looks like.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

//! Wire contracts shared by the admin dashboard: DTOs, closed status enums
//! and the response envelope the backend wraps them in.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;

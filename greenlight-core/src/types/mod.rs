//! Domain types shared across the Greenlight workspace.

pub mod collections;
pub mod credit;
pub mod creator;
pub mod role;
pub mod show;
pub mod team;

pub use credit::CreditRow;
pub use creator::Creator;
pub use role::CreditRole;
pub use show::{Show, ShowId};
pub use team::Team;

//! Calc module - fixed derivations and the custom calculator

mod derivation;
mod query;
mod value;

pub use derivation::{derive_all, Derivation, DerivedRow};
pub use query::{CustomQuery, Operator, UnknownOperator};
pub use value::{Computed, UNAVAILABLE};

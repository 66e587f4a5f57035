//! estimo-query - Property filters and predicate compilation
//!
//! This crate turns a user's property filter selections into the ordered
//! predicate clauses understood by the remote estimation service:
//!
//! - **FilterSet**: postal codes, built-year and floor-area ranges, and the
//!   city / ownership / room / building type / condition selections
//! - **Postal codes**: free-text validation (`"00740, 02320"`)
//! - **Clauses**: structured `field op value` and `field in (...)` tests,
//!   serialized to text only at the service boundary
//! - **Query parameters**: the flat `key=value` entry path
//!
//! # Examples
//!
//! ```
//! use estimo_query::{compile, City, FilterSet};
//!
//! let filters = FilterSet::new((1975, 2024), (25.0, 85.0))
//!     .with_postal_codes("00740, 02320")
//!     .with_cities([City::Helsinki, City::Espoo]);
//!
//! let predicate = compile(&filters).unwrap();
//! assert_eq!(predicate.render()[0], "postal_code in ('00740', '02320')");
//! assert_eq!(predicate.len(), 6);
//! ```

pub mod clause;
pub mod compile;
pub mod error;
pub mod filter;
pub mod params;
pub mod postal;

pub use clause::*;
pub use compile::*;
pub use error::*;
pub use filter::*;
pub use params::*;
pub use postal::*;

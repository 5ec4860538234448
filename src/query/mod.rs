//! The generic list-query contract: structured options in, query string out,
//! plus the inverse where-clause decoder.

mod builder;
mod where_clause;

pub use builder::{ListQuery, SortDir};
pub use where_clause::{Filter, Op, Where};

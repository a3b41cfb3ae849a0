//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteSpec[] (pattern, method, handler, redirect, honor extension)
//!     → path.rs (normalise)
//!     → table.rs (classify, detect conflicts)
//!         no `{..}` segment  → static map  (path → method → descriptor)
//!         has `{..}` segment → trie.rs     (segment → ... → method → descriptor)
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (path without query/fragment, method)
//!     → strip extension
//!     → static lookup, then `index` under trailing slash
//!     → trie walk, then `index` under trailing slash
//!     → Return: RouteDescriptor or None (caller serves GET /404)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: literal segments always beat parameter segments
//! - Parameter values are not captured; callers re-split the request path
//!   against [`RouteDescriptor::uri_pattern`]

pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod method;
pub mod path;
pub mod table;
pub mod trie;

pub use defaults::DefaultRoute;
pub use descriptor::{RouteDescriptor, RouteOrigin, RouteSpec};
pub use error::{ConfigurationError, RouteConflictError, RouteError, RouteResult};
pub use method::HttpMethod;
pub use path::normalize;
pub use table::{Mappings, RouteTable, RouteTableBuilder};

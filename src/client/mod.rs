//! Client Module
//!
//! The search session state container and the data source it fetches from.
//! A session tracks the current query, page and results; every navigation
//! action is one request, and only the most recently issued request may
//! update the state.

mod session;
mod source;

pub use session::{FetchOutcome, SearchSession, SearchState, PAGE_SIZE};
pub use source::{AdvocateSource, ClientError, HttpSource};

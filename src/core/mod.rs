//! Core navigation logic for the documentation viewer.
//!
//! This module provides:
//! - [`ViewState`] navigation state machine and [`LoadTicket`]s
//! - [`HashRouter`] URL fragment sync
//! - [`SearchSession`] class search and keyboard selection
//! - [`FragmentLoader`] class fragment fetching with staleness checks
//! - [`load_catalog`] and theme [`preferences`]

mod catalog;
pub mod error;
pub mod fragment;
pub mod preferences;
pub mod router;
pub mod search;
pub mod source;
pub mod view;

pub use catalog::load_catalog;
pub use fragment::{DomContentRegion, FragmentLoader};
pub use router::{BrowserLocation, HashRouter};
pub use search::SearchSession;
pub use source::HttpSource;
pub use view::{LoadTicket, ViewState};

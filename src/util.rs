//! Internal utilities, not part of the API

pub(crate) mod casting;
pub(crate) mod complex;
pub(crate) mod doc_macros;
pub(crate) mod float;

// re-exported by crate root
#[doc(hidden)]
pub mod __testing;

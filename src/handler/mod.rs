// Handler module entry point
// Request routing and the page/static handlers it dispatches to

pub mod information;
pub mod router;
pub mod static_files;
pub mod timeout;

pub use router::handle_request;

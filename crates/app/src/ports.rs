//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the controller and the outside world.
//! They are defined here (in `app`) so that both the controller and the
//! adapters can depend on them without creating circular dependencies.
//!
//! Futures returned by ports are not required to be `Send`: the browser
//! adapter runs on a single-threaded event loop.

pub mod dialogs;
pub mod transport;

pub use dialogs::Dialogs;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

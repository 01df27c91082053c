//! Model Context Protocol over a server-sent event stream.

pub mod jsonrpc;
pub mod protocol;
pub mod session;
pub mod transport;

pub use protocol::{handle_message, handle_request, parse_message, tools_list_result};
pub use session::{SessionGuard, SessionRegistry};

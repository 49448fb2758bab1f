mod msg_client_to_server;
mod msg_queue;
mod msg_server_to_client;

pub use self::msg_client_to_server::*;
pub use self::msg_queue::*;
pub use self::msg_server_to_client::*;

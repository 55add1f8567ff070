pub mod batch;
pub mod compose;
pub mod init;

pub use batch::{batch, BatchArgs};
pub use compose::{compose, ComposeArgs};
pub use init::{init, InitArgs};

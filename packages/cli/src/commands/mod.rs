pub mod generate;
pub mod init;
pub mod snapshot;

pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
pub use snapshot::{snapshot, SnapshotArgs};

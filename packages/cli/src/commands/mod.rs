pub mod blocks;
pub mod decorate;
pub mod init;

pub use blocks::{blocks, BlocksArgs};
pub use decorate::{decorate, DecorateArgs};
pub use init::{init, InitArgs};

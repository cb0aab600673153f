pub mod check;
pub mod helper;
pub mod init;
pub mod keys;
pub mod render;
pub mod resolve;

pub mod init;
pub mod stamp;
pub mod warm;

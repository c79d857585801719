mod add;
mod init;

pub use add::cmd_add;
pub use init::cmd_init;

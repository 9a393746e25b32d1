//! CLI commands

mod generate;
mod init;
mod validate;

pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;

pub mod demo;
pub mod init;
pub mod run;

pub use demo::demo;
pub use init::{init, InitArgs};
pub use run::{run, RunArgs};

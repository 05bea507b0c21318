pub mod audio;
pub mod http;
pub mod observability;
pub mod process;

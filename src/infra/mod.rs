pub mod assets;
pub mod http;

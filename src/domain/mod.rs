pub mod catalog;
pub mod entities;
pub mod format;
pub mod pipeline;
pub mod projection;
pub mod stats;

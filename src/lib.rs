pub mod commands;
pub mod github;
pub mod http;
pub mod report;
pub mod runtime;

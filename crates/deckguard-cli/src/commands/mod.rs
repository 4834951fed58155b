pub mod init;
pub mod redact;
pub mod rules;
pub mod serve;

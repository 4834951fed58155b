pub mod server;

pub use server::{OutlineServer, router};

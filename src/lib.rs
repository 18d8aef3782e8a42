pub mod client;
pub mod core;
pub mod scope;
pub mod storage;
pub mod util;

pub use client::{Client, ClientBuilder, Credential, Error};

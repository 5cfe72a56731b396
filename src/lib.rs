// Library module for the JWKS server

pub mod endpoints;
pub mod key_management;
pub mod server;
pub mod types;

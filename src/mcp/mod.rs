//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the unused style scan to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{SheetcheckMcpServer, run_server};

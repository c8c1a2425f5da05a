//! Source file parsers.
//!
//! - `jsx`: JS/JSX/TS/TSX source file parser (uses swc for AST generation)

pub mod jsx;

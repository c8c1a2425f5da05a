use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{BytePos, FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::{SourceContext, SourceLocation};

/// Extensions the parser accepts.
pub const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "mjs", "cjs"];

pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Returns true if the path has a JS/TS source extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Pick the swc syntax for a file based on its extension.
///
/// Plain `.ts` files are parsed without JSX so that `<T>value` casts work;
/// everything else accepts JSX.
fn syntax_for(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts") => Syntax::Typescript(TsSyntax {
            decorators: true,
            ..Default::default()
        }),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            decorators: true,
            ..Default::default()
        }),
    }
}

/// Parse a source string into an AST.
///
/// Accepts a shared SourceMap so callers that parse several files in one run
/// can keep positions in a single map.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {}", file_path, e.kind().msg()))?;

        Ok(ParsedModule { module, source_map })
    })
}

/// Parse with a fresh SourceMap.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedModule> {
    parse_jsx_source(code, file_path, Arc::new(SourceMap::default()))
}

/// Build a `SourceContext` for a byte position.
pub fn source_context_at(source_map: &SourceMap, file_path: &str, pos: BytePos) -> SourceContext {
    let loc = source_map.lookup_char_pos(pos);
    let source_line = loc
        .file
        .get_line(loc.line - 1)
        .map(|cow| cow.to_string())
        .unwrap_or_default();

    SourceContext::new(
        SourceLocation::new(file_path, loc.line, loc.col_display + 1),
        source_line,
    )
}

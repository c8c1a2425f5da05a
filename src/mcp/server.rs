use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, ImportIssueItem, Pagination,
    ScanUnusedStylesParams, UnusedStyleItem, UnusedStylesScanResult,
};
use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::CheckContext,
    issues::Issue,
    rules::check_unused_style_issues,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct SheetcheckMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for SheetcheckMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl SheetcheckMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan the project for unused StyleSheet entries
    #[tool(
        description = "Scan React Native source files for StyleSheet entries that are declared but never referenced. Returns paginated list of unused styles plus any unresolved imports."
    )]
    pub async fn scan_unused_styles(
        &self,
        params: Parameters<ScanUnusedStylesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let common = CommonArgs {
            source_root: Some(PathBuf::from(&params.project_root_path)),
            ..Default::default()
        };
        let ctx = CheckContext::new(&common)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let mut issues = check_unused_style_issues(&ctx);
        issues.sort();

        let mut files: HashSet<&str> = HashSet::new();
        let mut all_items: Vec<UnusedStyleItem> = Vec::new();
        let mut import_issues: Vec<ImportIssueItem> = Vec::new();
        for issue in &issues {
            match issue {
                Issue::UnusedStyle(unused) => {
                    files.insert(unused.context.file_path());
                    all_items.push(UnusedStyleItem::from(unused));
                }
                Issue::ImportResolution(import) => import_issues.push(ImportIssueItem::from(import)),
                Issue::ParseError(_) => {}
            }
        }

        let total_count = all_items.len();
        let items: Vec<UnusedStyleItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_json_result(&UnusedStylesScanResult {
            total_count,
            total_file_count: files.len(),
            items,
            import_issues,
            parse_error_count: ctx.parse_errors().len(),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get the current sheetcheck configuration
    #[tool(description = "Get the current sheetcheck configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for SheetcheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Sheetcheck MCP helps AI agents remove dead React Native StyleSheet entries.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_unused_styles - List declared but unreferenced styles (paginated)\n\n\
                 Each item points at the style declaration. Delete the entry, or reference it\n\
                 where it was meant to be used, then scan again."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = SheetcheckMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

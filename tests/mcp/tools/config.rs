use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use sheetcheck::mcp::{SheetcheckMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = SheetcheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["styleSheetObjectNames"], json!(["StyleSheet"]));
    assert_eq!(json_result["config"]["enableImportsCheck"], false);
    assert_eq!(json_result["config"]["ignores"], json!(["**/node_modules/**"]));
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "styleSheetObjectNames": ["OtherStyleSheet"],
            "enableImportsCheck": true
        }))
        .unwrap();

    let server = SheetcheckMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(
        json_result["config"]["styleSheetObjectNames"],
        json!(["OtherStyleSheet", "StyleSheet"])
    );
    assert_eq!(json_result["config"]["enableImportsCheck"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".sheetcheckrc.json"), "{ nope").unwrap();

    let server = SheetcheckMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

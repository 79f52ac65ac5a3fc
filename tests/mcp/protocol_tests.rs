//! MCP protocol unit tests

#[cfg(test)]
mod tests {
    use finlab_mcp::mcp::protocol::*;
    use serde_json::json;

    #[test]
    fn test_parse_initialize_request() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "1.0"}
            }
        }"#;

        let req: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method, "initialize");
        assert_eq!(req.jsonrpc, "2.0");
        assert_eq!(req.id, Some(json!(1)));
        assert!(req.params.is_some());
    }

    #[test]
    fn test_parse_request_without_id() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "method": "tools/list"}"#).unwrap();
        assert!(req.id.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn test_serialize_initialize_result() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: "1.0.0".to_string(),
            },
            capabilities: ServerCapabilities::default(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({
                "protocolVersion": "2024-11-05",
                "serverInfo": {"name": "finlab-docs", "version": "1.0.0"},
                "capabilities": {"tools": {}}
            })
        );
    }

    #[test]
    fn test_success_response_omits_error() {
        let response = JsonRpcResponse::success(Some(json!("abc")), json!({"ok": true}));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["result"]["ok"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response_omits_result() {
        let response = JsonRpcResponse::error(Some(json!(4)), METHOD_NOT_FOUND, "Method not found: x");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 4);
        assert_eq!(json["error"]["code"], -32601);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_tool_schema_uses_input_schema_key() {
        let schema = ToolSchema {
            name: "list_documents".to_string(),
            description: "List docs".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("inputSchema").is_some());
        assert!(json.get("input_schema").is_none());
    }

    #[test]
    fn test_text_content_block() {
        let result = ToolResult {
            content: vec![ContentBlock::Text {
                text: "hello".to_string(),
            }],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, json!({"content": [{"type": "text", "text": "hello"}]}));
    }
}

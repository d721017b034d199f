//! End-to-end tests that drive the server through an MCP client.


use crate::{Clock, FixedClock, Server};
use chrono::{TimeZone, Utc};
use rmcp::{
    RoleClient, ServiceError, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, ErrorData, Tool},
    service::RunningService,
};
use serde_json::{Map, Value};
use std::{io, sync::Arc};

/// 2024-01-01T12:00:00Z
pub fn new_year_noon() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ))
}

/// Manages communication with an MCP server
#[derive(Clone)]
pub struct Test {
    /// The client side of the connection
    client: Arc<RunningService<RoleClient, ()>>,
}

impl Test {
    /// Starts a server reading time from `clock` over a duplex connection
    pub async fn start(clock: Arc<dyn Clock>) -> io::Result<Self> {
        let (client, stream) = tokio::io::duplex(1 << 17);

        let server = Server::new(clock);

        tokio::spawn(async move {
            let server = server.serve(stream).await.unwrap();
            server.waiting().await.unwrap();
        });

        let client = ServiceExt::serve((), client).await.unwrap();

        Ok(Self {
            client: Arc::new(client),
        })
    }

    pub async fn list_tools(&self) -> Result<Vec<Tool>, ServiceError> {
        self.client.list_all_tools().await
    }

    pub async fn call_tool(
        &self,
        name: &'static str,
        args: Vec<(&str, Value)>,
    ) -> Result<CallToolResult, ServiceError> {
        let arguments: Map<String, Value> = args
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        self.client
            .call_tool(CallToolRequestParam {
                name: name.into(),
                arguments: Some(arguments),
            })
            .await
    }

    /// Calls a tool and returns the text of its first content item
    pub async fn call_text(&self, name: &'static str, args: Vec<(&str, Value)>) -> String {
        let result = self.call_tool(name, args).await.unwrap();
        result_text(&result)
    }

    /// Calls a tool whose execution is expected to fail, returning the
    /// error text carried in the `isError` result
    pub async fn call_failing(&self, name: &'static str, args: Vec<(&str, Value)>) -> String {
        let result = self.call_tool(name, args).await.unwrap();
        assert_eq!(result.is_error, Some(true), "{name} should have failed: {result:?}");

        let value = serde_json::to_value(&result).unwrap();
        value["content"][0]["text"]
            .as_str()
            .unwrap_or_else(|| panic!("no text content in {value}"))
            .to_string()
    }

    /// Calls a tool that is expected to fail with a protocol error
    pub async fn call_err(&self, name: &'static str, args: Vec<(&str, Value)>) -> ErrorData {
        match self.call_tool(name, args).await {
            Err(ServiceError::McpError(err)) => err,
            other => panic!("expected {name} to fail, got {other:?}"),
        }
    }
}

pub fn result_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    assert_ne!(value["isError"], Value::Bool(true), "tool reported an error: {value}");
    value["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("no text content in {value}"))
        .to_string()
}

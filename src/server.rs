use crate::{Clock, Error, SystemClock, tools};
use rmcp::{
    handler::server::{
        ServerHandler,
        tool::{Parameters, ToolRouter},
    },
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// Name advertised in the `initialize` reply.
pub const SERVER_NAME: &str = "adesso-gpt-demo";

type McpResult<T = (), E = rmcp::ErrorData> = core::result::Result<T, E>;

#[derive(Clone)]
pub struct Server {
    clock: Arc<dyn Clock>,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AddRequest {
    #[schemars(description = "The first addend")]
    pub a: i64,
    #[schemars(description = "The second addend")]
    pub b: i64,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TimeQuery {
    #[schemars(description = "IANA timezone name such as 'Europe/Berlin' or 'UTC'")]
    #[serde(default = "default_timezone")]
    pub tz: String,
}

fn default_timezone() -> String {
    tools::DEFAULT_TIMEZONE.to_string()
}

impl Default for Server {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[tool_router]
impl Server {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Adds two integers and returns their sum")]
    async fn add(&self, Parameters(params): Parameters<AddRequest>) -> McpResult<CallToolResult> {
        let AddRequest { a, b } = params;
        match tools::add(a, b) {
            Ok(sum) => {
                tracing::debug!(a, b, sum, "add");
                Ok(CallToolResult::success(vec![Content::text(sum.to_string())]))
            }
            Err(err) => {
                tracing::warn!(a, b, %err, "add rejected");
                Ok(tool_error("add", err))
            }
        }
    }

    #[tool(description = "Returns the current time in the given timezone as an ISO-8601 string")]
    async fn get_time(
        &self,
        Parameters(params): Parameters<TimeQuery>,
    ) -> McpResult<CallToolResult> {
        let tz = params.tz;
        match tools::current_time(self.clock.as_ref(), &tz) {
            Ok(now) => {
                tracing::debug!(%tz, %now, "get_time");
                Ok(CallToolResult::success(vec![Content::text(now)]))
            }
            Err(err) => {
                tracing::warn!(%tz, %err, "get_time rejected");
                Ok(tool_error("get_time", err))
            }
        }
    }
}

/// Tool failures travel as an `isError` result so callers still get a
/// `result` object carrying the message.
fn tool_error(tool: &str, err: Error) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Error executing tool {tool}: {err}"
    ))])
}

#[tool_handler]
impl ServerHandler for Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(include_str!("./instructions.md").into()),
        }
    }
}

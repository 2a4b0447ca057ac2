use crate::error::TopoError;
use crate::graph;
use crate::models::{Edge, SortedGraph};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};

/// Topological sort MCP server
#[derive(Clone)]
pub struct TopoSortMcp {
    tool_router: ToolRouter<Self>,
}

/// Tool input: the graph as a list of `[from, to]` pairs
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SortGraphInput {
    pub graph: Vec<Edge>,
}

// Response envelope
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> std::result::Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_to_response(e: TopoError) -> McpResponse<SortedGraph> {
    let error_code = format!("{e:?}");
    let message = e.to_string();
    McpResponse::error(&error_code, &message)
}

#[tool_router]
impl TopoSortMcp {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Topologically sort a directed graph. Takes a list of [from, to] edge pairs where 'from' must precede 'to'. Returns one valid ordering of all nodes; ties between equally-ready nodes are broken at random, so repeated calls may return different valid orders. Fails with CycleDetected if the graph is not a DAG."
    )]
    async fn toposort(
        &self,
        params: Parameters<SortGraphInput>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let edges = params.0.graph;
        tracing::debug!(edge_count = edges.len(), "toposort request");

        match graph::toposort(&edges) {
            Ok(order) => to_json(McpResponse::success(SortedGraph { order })),
            Err(e) => to_json(error_to_response(e)),
        }
    }
}

impl Default for TopoSortMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for TopoSortMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Topological sort service. Call the toposort tool with a graph given as \
                 [from, to] edge pairs to get one valid dependency ordering of its nodes, \
                 or a CycleDetected error if no ordering exists."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_mcp_server() -> crate::error::Result<()> {
    let server = TopoSortMcp::new();

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| TopoError::Mcp(e.to_string()))?;

    tracing::info!("MCP server listening on stdio");
    service
        .waiting()
        .await
        .map_err(|e| TopoError::Mcp(e.to_string()))?;
    Ok(())
}

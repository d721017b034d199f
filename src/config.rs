use crate::{Error, Result};
use std::{fmt, net::SocketAddr, str::FromStr};

/// How the server talks to its clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout
    Stdio,
    /// MCP streamable HTTP, served under [`Config::path`]
    #[default]
    StreamableHttp,
}

impl FromStr for Transport {
    type Err = Error;

    /// Accepts the same names as `--transport`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| Error::InvalidConfig(format!("unknown transport '{}'", s.trim())))
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::StreamableHttp => f.write_str("streamable-http"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub transport: Transport,

    /// Interface the HTTP transport binds to
    pub host: String,

    pub port: u16,

    /// Route the MCP endpoint is mounted under
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            path: "/mcp".to_string(),
        }
    }
}

impl Config {
    pub const TRANSPORT_VAR: &'static str = "MCP_TRANSPORT";
    pub const HOST_VAR: &'static str = "MCP_HOST";
    pub const PORT_VAR: &'static str = "MCP_PORT";
    pub const PATH_VAR: &'static str = "MCP_PATH";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from defaults overlaid with whatever `lookup` returns
    /// for the `MCP_*` variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(transport) = lookup(Self::TRANSPORT_VAR) {
            config.transport = transport.parse()?;
        }
        if let Some(host) = lookup(Self::HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = lookup(Self::PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "{} must be a port number, got '{port}'",
                    Self::PORT_VAR
                ))
            })?;
        }
        if let Some(path) = lookup(Self::PATH_VAR) {
            config.path = path;
        }

        config.validate()
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn validate(self) -> Result<Self> {
        if !self.path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "endpoint path must start with '/', got '{}'",
                self.path
            )));
        }
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfig("host must not be empty".to_string()));
        }
        Ok(self)
    }

    /// The `host:port` pair the HTTP transport listens on.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let host = match self.host.as_str() {
            "localhost" => "127.0.0.1",
            host => host,
        };
        format!("{host}:{}", self.port)
            .parse::<SocketAddr>()
            .or_else(|_| format!("[{host}]:{}", self.port).parse::<SocketAddr>())
            .map_err(|_| {
                Error::InvalidConfig(format!("cannot bind to '{}:{}'", self.host, self.port))
            })
    }
}

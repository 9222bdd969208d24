//! Server configuration and command line arguments.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;
use raumkernel::ZoneSpec;

use crate::error::ServerError;
use crate::logging::LoggingMode;

pub const DEFAULT_PORT: u16 = 8080;

/// Configuration of the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    /// Default: 0.0.0.0
    pub bind_address: IpAddr,

    /// Port to listen on; 0 lets the OS pick a free one
    /// Default: 8080
    pub port: u16,

    /// Headers sent with every response, before any an action asks for
    /// Default: `Access-Control-Allow-Origin: *`
    pub default_headers: Vec<(String, String)>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            default_headers: vec![("Access-Control-Allow-Origin".to_string(), "*".to_string())],
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bind_address(mut self, bind_address: IpAddr) -> Self {
        self.bind_address = bind_address;
        self
    }

    /// Add or replace a default response header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.default_headers.push((name, value.into()));
        self
    }
}

/// raumserver - JSON/HTTP control of a multiroom audio system
#[derive(Parser, Debug)]
#[command(name = "raumserver")]
#[command(about = "HTTP/JSON facade for multiroom renderer control")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "RAUMSERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "RAUMSERVER_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Zone layout of the simulated system, as NAME=ROOM[,ROOM...]. Repeatable.
    #[arg(short = 'z', long = "zone", value_name = "NAME=ROOMS")]
    pub zones: Vec<String>,

    /// Log filter override (e.g. "info", "raumserver=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output mode
    #[arg(long, value_enum, env = "RAUMSERVER_LOG_MODE", default_value_t = LoggingMode::Development)]
    pub log_mode: LoggingMode,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<(), ServerError> {
        self.zone_specs().map(|_| ())
    }

    /// Zones to simulate. Without `--zone`, a single zone `Living` holding
    /// one room `Living`.
    pub fn zone_specs(&self) -> Result<Vec<ZoneSpec>, ServerError> {
        if self.zones.is_empty() {
            return Ok(vec![ZoneSpec::new("Living", ["Living"])]);
        }
        self.zones.iter().map(|zone| parse_zone(zone)).collect()
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::new()
            .with_bind_address(self.bind)
            .with_port(self.port)
    }
}

/// Parse `NAME=ROOM[,ROOM...]`.
pub fn parse_zone(spec: &str) -> Result<ZoneSpec, ServerError> {
    let (name, rooms) = spec
        .split_once('=')
        .ok_or_else(|| ServerError::Config(format!("Invalid zone '{spec}': expected NAME=ROOM[,ROOM...]")))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ServerError::Config(format!("Invalid zone '{spec}': zone name is empty")));
    }

    let rooms: Vec<&str> = rooms
        .split(',')
        .map(str::trim)
        .filter(|room| !room.is_empty())
        .collect();
    if rooms.is_empty() {
        return Err(ServerError::Config(format!("Invalid zone '{spec}': no rooms given")));
    }

    Ok(ZoneSpec::new(name, rooms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert!(config.bind_address.is_unspecified());
        assert_eq!(
            config.default_headers,
            vec![("Access-Control-Allow-Origin".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn test_with_header_replaces_same_name() {
        let config = ServerConfig::new().with_header("access-control-allow-origin", "http://ui.local");
        assert_eq!(config.default_headers.len(), 1);
        assert_eq!(config.default_headers[0].1, "http://ui.local");
    }

    #[test]
    fn test_parse_zone() {
        let zone = parse_zone("Downstairs = Kitchen, Living Room").unwrap();
        assert_eq!(zone, ZoneSpec::new("Downstairs", ["Kitchen", "Living Room"]));
    }

    #[test]
    fn test_parse_zone_errors() {
        for spec in ["Downstairs", "=Kitchen", "Downstairs=", "Downstairs= , "] {
            assert!(matches!(parse_zone(spec), Err(ServerError::Config(_))), "{spec}");
        }
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "raumserver",
            "--port",
            "9090",
            "--bind",
            "127.0.0.1",
            "--zone",
            "Down=Kitchen,Living",
            "-z",
            "Up=Bedroom",
        ])
        .unwrap();

        assert!(args.validate().is_ok());
        let zones = args.zone_specs().unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].rooms, vec!["Bedroom".to_string()]);

        let config = args.server_config();
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[test]
    fn test_default_zone() {
        let args = Args::try_parse_from(["raumserver"]).unwrap();
        assert_eq!(args.zone_specs().unwrap(), vec![ZoneSpec::new("Living", ["Living"])]);
    }

    #[test]
    fn test_invalid_zone_fails_validation() {
        let args = Args::try_parse_from(["raumserver", "--zone", "nonsense"]).unwrap();
        assert!(args.validate().is_err());
    }
}

pub mod discovery;
pub mod parameter;

pub use discovery::DiscoveryConfig;
pub use parameter::ParameterConfig;

use clap::Parser;
use std::net::SocketAddr;

/// Listen address and logging flags shared by both binaries.
#[derive(Debug, Clone, Parser)]
#[command(about = "ECS demo service")]
pub struct ServerArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "80")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn init_logging(&self) {
        crate::utils::logger::init_logger(self.verbose, self.log_json);
    }
}

/// Formats a bound address the way the startup banner prints it.
pub fn listen_url(addr: &SocketAddr) -> String {
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_args_defaults() {
        let args = ServerArgs::parse_from(["service"]);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 80);
        assert!(!args.verbose);
        assert!(!args.log_json);
        assert_eq!(args.socket_addr(), "0.0.0.0:80");
    }

    #[test]
    fn test_server_args_overrides() {
        let args = ServerArgs::parse_from(["service", "--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(args.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_listen_url() {
        let addr: SocketAddr = "127.0.0.1:80".parse().unwrap();
        assert_eq!(listen_url(&addr), "http://127.0.0.1:80");
    }
}

//! Dashboard configuration.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Dashboard server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Address to bind.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: IpAddr,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the panel pages and assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Root page, relative to `static_dir`.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Top10 page, relative to `static_dir`.
    #[serde(default = "default_top10_page")]
    pub top10_page: String,
}

fn default_bind_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8082
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_index_file() -> String {
    "index.html".to_string()
}

fn default_top10_page() -> String {
    "top10.html".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            static_dir: default_static_dir(),
            index_file: default_index_file(),
            top10_page: default_top10_page(),
        }
    }
}

impl DashboardConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }

    pub fn top10_page_path(&self) -> PathBuf {
        self.static_dir.join(&self.top10_page)
    }
}

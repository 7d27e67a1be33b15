use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKSHORTY_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "LINKSHORTY_PUBLIC_BASE_URL";
pub const CODE_LENGTH_ENV: &str = "LINKSHORTY_CODE_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "LINKSHORTY_MAX_ATTEMPTS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "linkshorty-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Address advertised in returned short URLs.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    #[arg(
        long,
        env = CODE_LENGTH_ENV,
        default_value_t = linkshorty_core::DEFAULT_CODE_LENGTH
    )]
    pub code_length: usize,

    /// Collision retries before a shorten request fails.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = linkshorty_shortener::DEFAULT_MAX_ATTEMPTS
    )]
    pub max_attempts: u32,
}

// ABOUTME: Panel endpoint address parsing.
// ABOUTME: Accepts "host", "host:port", "http://host:port/base" and similar forms.

use serde::Deserialize;
use std::fmt;

const DEFAULT_HTTP_PORT: u16 = 80;

/// Where the panel backend listens: host, port, and the API base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
    base_path: String,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16, base_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            base_path: base_path.into(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("server address cannot be empty".to_string());
        }

        // Parse format: [http://]host[:port][/base]
        let rest = match s.split_once("://") {
            Some(("http", rest)) => rest,
            Some(("https", _)) => {
                return Err(format!("{s}: https is not supported, use an http endpoint"));
            }
            Some((scheme, _)) => return Err(format!("unsupported scheme: {scheme}")),
            None => s,
        };

        let (authority, path) = match rest.find('/') {
            Some(slash) => (&rest[..slash], &rest[slash..]),
            None => (rest, ""),
        };

        let (host, port) = split_host_port(authority)?;
        if host.is_empty() {
            return Err("hostname cannot be empty".to_string());
        }

        Ok(Endpoint {
            host: host.to_string(),
            port,
            base_path: path.trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// API prefix prepended to every request path; empty or `/`-led.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `host:port`, suitable for a TCP connect.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Value for the `Host` header.
    pub fn host_header(&self) -> String {
        if self.port == DEFAULT_HTTP_PORT {
            self.host.clone()
        } else {
            self.authority()
        }
    }

    /// Request target for an API path.
    pub fn url_path(&self, path: &str) -> String {
        format!("{}{}", self.base_path, path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}{}", self.authority(), self.base_path)
    }
}

impl std::str::FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Endpoint::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn split_host_port(authority: &str) -> Result<(&str, u16), String> {
    // Bracketed IPv6 literal, e.g. [::1]:8080
    if authority.starts_with('[') {
        let close = authority
            .find(']')
            .ok_or_else(|| format!("unterminated IPv6 address: {authority}"))?;
        let host = &authority[..=close];
        return match &authority[close + 1..] {
            "" => Ok((host, DEFAULT_HTTP_PORT)),
            rest => match rest.strip_prefix(':') {
                Some(port) => parse_port(port).map(|p| (host, p)),
                None => Err(format!("invalid address: {authority}")),
            },
        };
    }

    match authority.rfind(':') {
        Some(colon) => parse_port(&authority[colon + 1..]).map(|p| (&authority[..colon], p)),
        None => Ok((authority, DEFAULT_HTTP_PORT)),
    }
}

fn parse_port(s: &str) -> Result<u16, String> {
    s.parse::<u16>().map_err(|_| format!("invalid port: {s}"))
}

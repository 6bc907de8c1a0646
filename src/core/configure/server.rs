use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

use dotenvy::dotenv;
use std::env;

pub struct Config {
    pub http_port: u16,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("ARMORY_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let default_page_size = match env::var("ARMORY_DEFAULT_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(20),
            Err(_) => 20,
        };

        let max_page_size = match env::var("ARMORY_MAX_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(2000),
            Err(_) => 2000,
        };

        Self {
            http_port,
            default_page_size,
            max_page_size,
        }
    }
}

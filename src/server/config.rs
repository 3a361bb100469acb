/// Runtime configuration read from the environment.
pub struct Config {
    /// Connection string for the persistence engine
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `0.0.0.0:8080`
    pub listen_addr: String,
}

impl Config {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")?,
        })
    }
}

use clap::{
    crate_authors,
    crate_description,
    crate_name,
    crate_version,
    Args,
    Parser,
};

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the bidding server service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    #[command(flatten)]
    pub server: ServerOptions,

    #[command(flatten)]
    pub user_service: UserServiceOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Server Options")]
#[group(id = "Server")]
pub struct ServerOptions {
    /// Address and port to listen on for the HTTP API.
    #[arg(long = "listen-addr")]
    #[arg(env = "LISTEN_ADDR")]
    #[arg(default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Connection string for the Postgres database holding listings and bids.
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url: String,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "User Service Options")]
#[group(id = "UserService")]
pub struct UserServiceOptions {
    /// Base URL of the users service used to validate caller tokens.
    #[arg(long = "user-service-url")]
    #[arg(env = "USER_SERVICE_URL")]
    #[arg(default_value = "http://localhost:8081")]
    pub base_url: String,
}

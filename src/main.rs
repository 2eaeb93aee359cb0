mod config;
mod http;
mod routing;
mod server;

use config::Config;
use http::request::Request;
use http::response::ResponseMeta;
use server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let mut server = Server::new(cfg);

    server.set_static_root("/webroot");

    server.register("/hello", |req: &Request, _meta: &mut ResponseMeta| {
        match req.query_value("name") {
            Some(name) => format!("Hello {name}"),
            None => "Hello stranger".to_string(),
        }
    });

    server.register("/pi", |_req: &Request, _meta: &mut ResponseMeta| {
        std::f64::consts::PI.to_string()
    });

    server.register("/sum", |req: &Request, _meta: &mut ResponseMeta| {
        match (req.query_value("a"), req.query_value("b")) {
            (Some(a), Some(b)) => match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(a), Ok(b)) => format!("Sum: {}", a + b),
                _ => "Error: Invalid numbers".to_string(),
            },
            _ => "Error: Missing parameters a and b".to_string(),
        }
    });

    tracing::info!("Endpoints: /app/hello?name=You, /app/pi, /app/sum?a=5&b=3, /index.html");

    tokio::select! {
        res = server.start() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "senden-server", about = "Waitlist endpoint for the senden site")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("senden_server=debug,senden_api=debug")
        .init();

    let args = Args::parse();
    let app = senden_server::router();

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .expect("bind listen address");
    tracing::info!("Waitlist endpoint listening on http://{}", args.listen);
    axum::serve(listener, app).await.expect("server failed");
}

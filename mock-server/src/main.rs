use tokio::net::TcpListener;

/// Serve the mock joke API locally, e.g. for `microrest uri=http://127.0.0.1:3000/jokes/random`.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("MOCK_PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock joke API on http://{addr} (/jokes/random, /headers, /status/{{code}})");
    mock_server::run(listener).await
}

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Same default port as the real service, so a frontend pointed at
    // localhost works unchanged.
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    println!("mock todo service on 127.0.0.1:{port}");
    mock_server::run(listener).await
}

#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    people_server::run().await;
}

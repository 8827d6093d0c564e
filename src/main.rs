#[tokio::main]
async fn main() {
    titlepage::start_server().await;
}

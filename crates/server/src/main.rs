//! Tasklist server binary.
//!
//! Serves the auth and todo APIs over HTTP.

#[tokio::main]
async fn main() {
    tsk_core::log();
    tsk_server::run().await.unwrap();
}

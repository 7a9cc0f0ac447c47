//! Game engine runner (child binary).
//!
//! Reads command bytes from stdin and draws on the terminal it shares with
//! the capture process. Runs until killed.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    blockfall::engine::run().await;
}

#[tokio::main]
async fn main() {
    if let Err(e) = rx_voicemail_lib::run().await {
        eprintln!("rx-voicemail: {e}");
        std::process::exit(1);
    }
}

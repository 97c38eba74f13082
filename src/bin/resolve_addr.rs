use hafrag::domain::ports::AddressLookup;
use hafrag::{Resolution, SystemDns};

/// Resolves a hostname through the system resolver. Prints the address on
/// success; prints nothing and exits 1 when the name does not resolve.
#[tokio::main]
async fn main() {
    let Some(hostname) = std::env::args().nth(1) else {
        eprintln!("Usage: resolve-addr <hostname>");
        std::process::exit(2);
    };

    match SystemDns.lookup(&hostname).await {
        Resolution::Resolved(addr) => println!("{}", addr),
        Resolution::NotFound => std::process::exit(1),
    }
}

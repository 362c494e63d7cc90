use base58_to_bytes::base58::Base58Codec;
use base58_to_bytes::{logger, snippet};

fn main() {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <base58_string>", args[0]);
        std::process::exit(1);
    }

    let codec = Base58Codec;

    let bytes = match codec.decode(&args[1]) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(2);
        }
    };

    log::debug!("decoded {} characters into {} bytes", args[1].len(), bytes.len());

    println!("Length: {}", bytes.len());
    println!("Byte array: {bytes:?}");
    println!("\nRust constant snippet:\n");
    println!("{}", snippet::render(&bytes));
}

//! Textbook RSA demo
//!
//! Derives a toy key pair from two primes, chunks a message, encrypts every
//! chunk with the public exponent, decrypts it with the private one, and
//! prints the three integer sequences.

use std::process::ExitCode;

use clap::Parser;
use textbook_rsa::encoding::{decode_chunks, to_hex, unpad};
use textbook_rsa::rsa::{KeyParams, ToyKeyPair, Transcript, run};

// ── CLI Arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "textbook-rsa", version, about = "Textbook RSA over toy primes")]
struct Args {
    /// First prime
    #[arg(long, default_value_t = 53, env = "TEXTBOOK_RSA_P1")]
    p1: u64,

    /// Second prime
    #[arg(long, default_value_t = 59, env = "TEXTBOOK_RSA_P2")]
    p2: u64,

    /// Public exponent
    #[arg(short, long, default_value_t = 3, env = "TEXTBOOK_RSA_EXPONENT")]
    exponent: u64,

    /// Message to encrypt
    #[arg(
        short,
        long,
        default_value = "OHAI you can read me!",
        env = "TEXTBOOK_RSA_MESSAGE"
    )]
    message: String,

    /// Bytes per chunk (1..=8)
    #[arg(short, long, default_value_t = 1, env = "TEXTBOOK_RSA_CHUNK_SIZE")]
    chunk_size: usize,
}

// ── Entry Point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textbook_rsa=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let params = KeyParams {
        p1: args.p1,
        p2: args.p2,
        public_exponent: args.exponent,
    };

    let keys = match ToyKeyPair::derive(&params) {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!(error = %e, "key derivation failed");
            return ExitCode::FAILURE;
        }
    };

    print_keys(&params, &keys);

    tracing::info!(
        message = %args.message,
        hex = %to_hex(args.message.as_bytes()),
        chunk_size = args.chunk_size,
        "encrypting message"
    );

    let transcript = match run(args.message.as_bytes(), args.chunk_size, &keys) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "encryption pipeline failed");
            return ExitCode::FAILURE;
        }
    };

    print_transcript(&transcript, args.chunk_size);

    ExitCode::SUCCESS
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_keys(params: &KeyParams, keys: &ToyKeyPair) {
    println!("\nPRIMES{}", "-".repeat(70));
    println!("P1 = {}\nP2 = {}", params.p1, params.p2);

    println!("\nPUBLIC KEY{}", "-".repeat(66));
    println!("n = {}\ne = {}", keys.modulus(), keys.public_exponent());

    println!("\nphi(n) = {}", keys.phi());

    println!("\nPRIVATE KEY{}", "-".repeat(65));
    println!("d = {}\nn = {}", keys.private_exponent(), keys.modulus());

    if !keys.is_consistent() {
        tracing::warn!(
            e = keys.public_exponent(),
            d = keys.private_exponent(),
            phi = keys.phi(),
            "e * d is not 1 mod phi(n); decryption will not round-trip"
        );
    }
}

fn print_transcript(transcript: &Transcript, chunk_size: usize) {
    println!();
    println!("{:?}", transcript.plaintext);
    println!("{:?}", transcript.encrypted);
    println!("{:?}", transcript.decrypted);

    match decode_chunks(&transcript.decrypted, chunk_size) {
        Ok(bytes) => println!("\n{}", String::from_utf8_lossy(unpad(&bytes))),
        Err(e) => tracing::warn!(error = %e, "decrypted chunks do not decode"),
    }
}

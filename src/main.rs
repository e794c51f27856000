use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use xorcrack::{is_printable_ascii, xor};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recover XOR keys from ciphertext via known plaintext or single-byte brute force", long_about = None)]
struct Args {
    /// hex-encoded ciphertext
    #[arg(short, long)]
    ciphertext: Option<String>,

    /// file containing the raw ciphertext bytes
    #[arg(long, conflicts_with = "ciphertext")]
    cipherfile: Option<PathBuf>,

    /// known plaintext fragment, e.g. a flag prefix like crypto{
    #[arg(short, long)]
    known: Option<String>,

    /// offset in the ciphertext where the known plaintext is aligned
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// brute force a single-byte XOR key instead of using known plaintext
    #[arg(long, default_value_t = false)]
    brute: bool,

    /// check whether the decrypted output contains this flag prefix
    #[arg(long)]
    check_flag_format: Option<String>,

    /// write the recovered key and plaintext to a file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_ciphertext(args: &Args) -> Result<Vec<u8>> {
    if let Some(hex_str) = &args.ciphertext {
        hex::decode(hex_str.trim()).context("Invalid hex ciphertext.")
    } else if let Some(path) = &args.cipherfile {
        fs::read(path).with_context(|| format!("Failed to read {}.", path.display()))
    } else {
        bail!("No ciphertext provided.")
    }
}

fn print_key(key: &[u8]) {
    if is_printable_ascii(key) {
        println!("[+] Key (ASCII): {}", String::from_utf8_lossy(key));
    }
    println!("[+] Key (HEX):   {}", hex::encode(key));
}

fn save_output(path: &Path, key: &[u8], plaintext: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to open {} for writing.", path.display()))?;
    if is_printable_ascii(key) {
        writeln!(file, "[+] Key (ASCII): {}", String::from_utf8_lossy(key))?;
    }
    writeln!(file, "[+] Key (HEX):   {}", hex::encode(key))?;
    writeln!(file)?;
    writeln!(file, "[+] Decrypted Message:")?;
    file.write_all(plaintext)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cipher = read_ciphertext(&args)?;

    let (key, plaintext) = if args.brute {
        let candidates = xor::attack::brute_force(&cipher)?;
        println!("[+] Brute XOR Top Results:");
        for candidate in candidates.iter().take(5) {
            println!(
                "[Key: {:02x}] Score: {}\n    {}\n",
                candidate.key,
                candidate.score,
                String::from_utf8_lossy(&candidate.plaintext)
            );
        }
        let best = &candidates[0];
        println!("[+] Brute-force key: {:#04x}", best.key);
        (vec![best.key], best.plaintext.clone())
    } else if let Some(known) = &args.known {
        let (key, plaintext) = xor::attack::recover_with_known(&cipher, known.as_bytes(), args.offset)?;
        print_key(&key);
        (key, plaintext)
    } else {
        bail!("Use either --brute or provide known plaintext with -k.")
    };

    println!("\n[+] Decrypted:");
    println!("{}", String::from_utf8_lossy(&plaintext));

    if let Some(prefix) = &args.check_flag_format {
        if String::from_utf8_lossy(&plaintext).contains(prefix.as_str()) {
            println!("[✓] Flag format matched: {prefix}");
        } else {
            println!("[✗] Flag format not found.");
        }
    }

    if let Some(path) = &args.output {
        save_output(path, &key, &plaintext)?;
        println!("[+] Output written to {}", path.display());
    }

    Ok(())
}

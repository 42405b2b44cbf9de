use std::io::{self, Read};

use canonical::{canonicalize, hash_canonical_bytes, CANONICAL_VERSION};

fn main() -> io::Result<()> {
    // Canonicalize the arguments if any were given, stdin otherwise.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let content = if args.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.join(" ")
    };

    let canonical_text = canonicalize(&content);
    println!("canonical: {canonical_text}");
    println!(
        "sha256: {}",
        hash_canonical_bytes(CANONICAL_VERSION, canonical_text.as_bytes())
    );
    Ok(())
}

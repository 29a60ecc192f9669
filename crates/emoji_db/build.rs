use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(&env::var("OUT_DIR")?).join("codegen.rs");
    let mut file = BufWriter::new(File::create(&path)?);

    let src = include_str!("./codepoints.txt");

    let mut seen = HashSet::new();
    let mut set = phf_codegen::Set::new();

    for (lineno, line) in src.lines().enumerate() {
        let key = line.trim();

        if key.starts_with('#') || key.is_empty() {
            continue;
        }

        for token in key.split('-') {
            if token.is_empty() || !token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
                return Err(format!("line {}: bad token {token:?} in {key:?}", lineno + 1).into());
            }

            let value = u32::from_str_radix(token, 16)?;
            if value > 0x10FFFF {
                return Err(format!("line {}: token {token:?} exceeds U+10FFFF", lineno + 1).into());
            }
        }

        // phf_codegen panics on duplicate entries
        if seen.insert(key) {
            set.entry(key);
        }
    }

    write!(
        file,
        "static CODEPOINTS: phf::Set<&'static str> = {};\n",
        set.build()
    )?;

    Ok(())
}

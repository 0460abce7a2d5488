use std::env;
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::process;

use byteorder::{LittleEndian, WriteBytesExt};

use rvasm::asm;

// Default input when no source file is given on the command line
const EROSION_DEMO: &str = include_str!("../../demos/erosion.s");

fn main() {
    let args: Vec<String> = env::args().collect();

    let source = match args.get(1) {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                process::exit(1);
            },
        },
        None => EROSION_DEMO.to_string(),
    };

    let words = match asm::assemble(&source) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("assembly failed: {}", e);
            process::exit(1);
        },
    };

    // Binary strings, one instruction per line, loadable by the cpu testbench
    for word in &words {
        println!("{:032b}", word);
    }

    // Hex dump for cross-checking against objdump
    println!();
    for (i, word) in words.iter().enumerate() {
        println!("{:04x}: {:08x}", i * 4, word);
    }
    println!("\nTotal instructions: {}", words.len());

    let out_path = args.get(2).map(String::as_str).unwrap_or("program.bin");
    let binary_code = {
        let mut wtr = vec![];
        for word in &words {
            let _ = wtr.write_u32::<LittleEndian>(*word);
        }
        wtr
    };

    let result = File::create(out_path).and_then(|mut file| file.write_all(&binary_code[..]));
    if let Err(e) = result {
        eprintln!("{}: {}", out_path, e);
        process::exit(1);
    }
}

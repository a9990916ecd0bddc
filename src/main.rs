//! A small xxhsum-like application printing the XXH32 digest of files or of
//! standard input. Example invocations:
//! echo -n "abracadabra" | ./xxhsum32
//! ./xxhsum32 -seed0x9E3779B1 Cargo.toml src/lib.rs

#[macro_use]
extern crate log;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::{env, process};

use tracing_subscriber::EnvFilter;
use xxhash32::checksum::io::HashReader;

struct Config {
    exe_name: String,
    seed: u32,
    chunk_size: usize,
    help: bool,
    inputs: Vec<String>,
}

type Handler = Box<dyn Fn(&str, &mut Config) -> Result<(), String>>;

fn parse_u32(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("bad number '{}': {}", s, e))
}

impl Config {
    fn query<I>(mut args: I) -> Result<Config, String> where I: Iterator<Item = String> {
        let mut cfg = Config {
            exe_name: args.next().unwrap_or_else(|| "xxhsum32".to_string()),
            seed: 0,
            chunk_size: 1 << 16,
            help: false,
            inputs: Vec::new(),
        };
        let mut handlers: HashMap<&str, Handler> = HashMap::new();
        handlers.insert("seed", Box::new(|s: &str, cfg: &mut Config| {
            cfg.seed = parse_u32(s)?;
            Ok(())
        }));
        handlers.insert("chunk", Box::new(|s: &str, cfg: &mut Config| {
            match parse_u32(s)? {
                0 => Err("chunk size must be positive".to_string()),
                n => { cfg.chunk_size = n as usize; Ok(()) }
            }
        }));
        handlers.insert("h", Box::new(|_: &str, cfg: &mut Config| { cfg.help = true; Ok(()) }));

        for arg in args {
            let slice = &arg[..];
            if slice.starts_with('-') && slice.len() > 1 {
                match handlers.iter().find(|&(&k, _)| slice[1..].starts_with(k)) {
                    Some((k, h)) => h(&slice[1 + k.len()..], &mut cfg)?,
                    None => warn!("unrecognized option: {}", slice),
                }
            } else {
                cfg.inputs.push(arg);
            }
        }
        Ok(cfg)
    }
}

fn digest_stream<R: Read>(input: R, cfg: &Config) -> io::Result<u32> {
    let mut reader = HashReader::new(input, cfg.seed);
    let mut buf = vec![0u8; cfg.chunk_size];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => (),
            Err(e) => return Err(e),
        }
    }
    debug!("hashed {} bytes", reader.total_len());
    Ok(reader.digest())
}

fn digest_input(name: &str, cfg: &Config) -> io::Result<u32> {
    if name == "-" {
        digest_stream(io::stdin().lock(), cfg)
    } else {
        digest_stream(File::open(name)?, cfg)
    }
}

/// main entry point
pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = match Config::query(env::args()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };
    if config.help {
        println!("xxhsum32: XXH32 digests of files");
        println!("Usage:");
        println!("\t{} <options> [file1 .. fileN]", config.exe_name);
        println!("Options:");
        println!("\t-seed<N> (hash seed, decimal or 0x-prefixed hex)");
        println!("\t-chunk<N> (read buffer size)");
        println!("\t-h (this help)");
        println!("With no file, or when a file is -, read standard input.");
        return
    }
    if config.inputs.is_empty() {
        config.inputs.push("-".to_string());
    }

    let mut failed = false;
    for name in config.inputs.iter() {
        match digest_input(name, &config) {
            Ok(digest) => println!("{:08x}  {}", digest, name),
            Err(e) => {
                error!("{}: {}", name, e);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
}

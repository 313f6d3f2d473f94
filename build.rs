use std::env;
use std::fs;
use std::path::Path;

// Variables que el cliente lee con option_env! en tiempo de compilación
const FORWARDED_KEYS: &[&str] = &["REX_API_URL", "MAPBOX_ACCESS_TOKEN"];

fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, con comillas opcionales
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !FORWARDED_KEYS.contains(&key) {
                        continue;
                    }

                    // La variable del entorno real tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. REX_API_URL and MAPBOX_ACCESS_TOKEN fall back to defaults.");
    }

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}

//! Build script for christmas-lights.

use std::{env, fmt::Write as _, fs, path::PathBuf};

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // 1) Generate the tree's position table from the captured coordinates
    let csv_path = manifest_dir.join("data/positions.csv");
    println!("cargo:rerun-if-changed={}", csv_path.display());
    let csv = fs::read_to_string(&csv_path).expect("Failed to read data/positions.csv");

    let mut rows = Vec::new();
    for (line_number, line) in csv.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let coords: Vec<i16> = line
            .split(',')
            .map(|field| {
                field.trim().parse().unwrap_or_else(|err| {
                    panic!(
                        "data/positions.csv:{}: bad coordinate {field:?}: {err}",
                        line_number + 1
                    )
                })
            })
            .collect();
        let [x, y, z] = coords[..] else {
            panic!(
                "data/positions.csv:{}: expected x,y,z but found {} fields",
                line_number + 1,
                coords.len()
            );
        };
        rows.push((x, y, z));
    }
    assert!(!rows.is_empty(), "data/positions.csv has no positions");

    let mut generated = String::new();
    generated.push_str("// Generated by build.rs from data/positions.csv - do not edit manually\n\n");
    writeln!(
        generated,
        "/// Position of every pixel on the tree, in strip order.\npub const POSITIONS: [Position; {}] = [",
        rows.len()
    )
    .unwrap();
    for (x, y, z) in &rows {
        writeln!(generated, "    Position::new({x}, {y}, {z}),").unwrap();
    }
    generated.push_str("];\n");
    fs::write(out_dir.join("positions.rs"), generated).expect("Failed to write positions.rs");

    // 2) Handle memory.x based on target
    let target = env::var("TARGET").unwrap();

    let memory_file = if target.starts_with("thumbv8m") {
        // Pico 2 ARM
        Some("memory-pico2.x")
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        Some("memory-pico1.x")
    } else {
        None
    };

    if let Some(memory_file) = memory_file {
        let memory_x = fs::read_to_string(manifest_dir.join(memory_file))
            .unwrap_or_else(|_| panic!("Failed to read {memory_file}"));
        fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={memory_file}");
    }
}

use std::{path::PathBuf, process::Command};

const ASSETS: [&str; 4] = [
    "index.html",
    "index.css",
    "taskit-frontend.js",
    "taskit-frontend_bg.wasm",
];

fn main() {
    // only build and bundle the frontend if the bundle feature is set
    if std::env::var("CARGO_FEATURE_BUNDLE").is_err() {
        return;
    }

    println!("cargo:rerun-if-changed=../frontend");
    println!("cargo:rerun-if-changed=../model");

    let bundle_out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap())
        .join("bundle");

    let status = Command::new("../script/build-frontend")
        .env("BUNDLE_DIR", &bundle_out_dir)
        .spawn()
        .unwrap()
        .wait()
        .unwrap();

    if !status.success() {
        panic!("script/build-frontend failed");
    }

    for asset in ASSETS {
        if !bundle_out_dir.join(asset).exists() {
            panic!("script/build-frontend did not produce {asset}");
        }
    }

    println!("cargo:rustc-env=BUNDLE_DIR={}", bundle_out_dir.display());
}

//! Records the compiler release for the toolchain run conditions.

fn main() {
    let version = rustc_version::version().map_or_else(|_| String::from("unknown"), |v| v.to_string());
    println!("cargo:rustc-env=TESTBED_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}

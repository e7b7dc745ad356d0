// File: crates/gw-core/build.rs
// Summary: Links advapi32 on Windows; skia-safe's ICU data lookup reads the registry.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}

// File: crates/stockview-skia/build.rs
// Summary: Links the Windows system libraries skia-safe's text stack expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // ICU inside skia-safe reads locale data through the registry API.
        println!("cargo:rustc-link-lib=advapi32");
    }
}

use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Cargo scans the whole directory for mtime changes.
    println!("cargo:rerun-if-changed=static");
    println!("cargo:rerun-if-changed=build.rs");

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ACTIVITY_SIGNUP_BUILD_ID={}", build_id);
}

fn main() {
    // The desktop shell only exists on macOS; the core, config and CLI build everywhere.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("macos") {
        return;
    }

    // SMAppService lives in ServiceManagement; the login item toggle needs it at link time.
    println!("cargo:rustc-link-lib=framework=ServiceManagement");

    tauri_build::build();
}

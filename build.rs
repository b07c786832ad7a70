use std::env;

fn main() {
    println!("cargo:rerun-if-changed=src/oslog_shim.c");

    // os/log.h only exists in Apple SDKs; every other target uses the
    // in-process backend in core/sys.rs and needs no C code at all.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        cc::Build::new().file("src/oslog_shim.c").compile("oslog_shim");
    }
}

//! Binary entrypoint for the browser-hosted dashboard site.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    dashboard_site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `dashboard_site_app` for wasm32 with the `csr` feature and serve it with trunk."
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    storefront_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("storefront-frontend targets wasm32; build it with trunk");
}

//! Entry point for the WASM application

pub fn main() {
    spheroid_frontend::start();
}

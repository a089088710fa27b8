#![allow(non_snake_case)]

use cutcraft::client;

fn main() {
    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    dioxus::launch(client::App);
}

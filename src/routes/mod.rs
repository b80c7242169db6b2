use dioxus::prelude::*;

pub mod home;

use home::Home;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
}

/// Page shell: header on top, routed content below. The toast host is
/// provided above the router, at the app root.
#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-background transition-colors",
            crate::components::Header {}

            main {
                class: "max-w-4xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}

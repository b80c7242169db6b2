use dioxus::prelude::*;

/// Fixed header bar at the top of the page shell.
#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-30 bg-background/80 backdrop-blur-sm border-b border-border",
            div {
                class: "max-w-4xl mx-auto px-4 py-3 flex items-center gap-2",
                div {
                    class: "w-8 h-8 bg-blue-500 rounded-full flex items-center justify-center text-white font-bold",
                    "N"
                }
                span {
                    class: "text-lg font-bold",
                    "noteboard"
                }
            }
        }
    }
}

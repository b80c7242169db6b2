use dioxus::prelude::*;

use crate::components::NotesTable;

#[component]
pub fn Home() -> Element {
    rsx! {
        NotesTable {}
    }
}

use dioxus::prelude::*;

use crate::services::notes::{fetch_notes, Note};

/// Row model for the notes table: 1-based display index plus title, in the
/// order the backend returned the notes.
fn row_models(notes: &[Note]) -> Vec<(usize, String)> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| (i + 1, note.title.clone()))
        .collect()
}

/// Table of all notes fetched from the backend.
///
/// Owns its own note list; issues one read on mount and re-renders when it
/// settles. A failed fetch is logged and the view stays on the empty state,
/// indistinguishable from "no notes yet".
#[component]
pub fn NotesTable() -> Element {
    let mut notes = use_signal(Vec::<Note>::new);

    // Fetch notes on mount. The effect reads no signals, so re-renders
    // never re-trigger it.
    use_effect(move || {
        spawn(async move {
            match fetch_notes().await {
                Ok(fetched) => {
                    notes.set(fetched);
                }
                Err(e) => {
                    log::error!("Failed to fetch notes: {}", e);
                }
            }
        });
    });

    rsx! {
        if notes.read().is_empty() {
            // Empty state
            div {
                class: "w-full h-full flex justify-center items-center",
                h1 {
                    class: "text-center max-w-2xl mb-4 text-4xl font-extrabold tracking-tight leading-none md:text-5xl xl:text-6xl",
                    "No notes created!"
                }
            }
        } else {
            div {
                class: "w-full overflow-x-auto shadow-md sm:rounded-lg",
                table {
                    class: "w-full text-sm text-left text-gray-500",
                    thead {
                        class: "text-xs text-gray-700 uppercase bg-gray-50",
                        tr {
                            th { scope: "col", class: "px-6 py-3", "#" }
                            th { scope: "col", class: "px-6 py-3", "Note" }
                            th { scope: "col", class: "px-6 py-3", "Action" }
                        }
                    }
                    tbody {
                        for (index, title) in row_models(&notes.read()) {
                            NoteRow {
                                key: "{index}",
                                index,
                                title
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NoteRow(index: usize, title: String) -> Element {
    rsx! {
        tr {
            class: "bg-white border-b border-gray-200 hover:bg-gray-50",
            th {
                scope: "row",
                class: "px-6 py-4 font-medium text-gray-900 whitespace-nowrap",
                "{index}"
            }
            td {
                class: "px-6 py-4",
                "{title}"
            }
            td {
                class: "px-6 py-4",
                // Placeholder link; a note detail view does not exist yet
                a {
                    href: "#",
                    class: "font-medium text-blue-600 hover:underline",
                    "View"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notes::parse_notes;

    #[test]
    fn test_rows_are_one_indexed_in_backend_order() {
        let body = r#"{"response": [{"title": "Buy milk"}, {"title": "Walk dog"}]}"#;
        let notes = parse_notes(body).unwrap();
        let rows = row_models(&notes);
        assert_eq!(
            rows,
            vec![(1, "Buy milk".to_string()), (2, "Walk dog".to_string())]
        );
    }

    #[test]
    fn test_no_rows_for_empty_collection() {
        // Empty collection renders the empty-state heading, not a table
        assert!(row_models(&[]).is_empty());
    }

    #[test]
    fn test_row_indices_count_up_from_one() {
        let notes: Vec<Note> = (0..5)
            .map(|i| Note {
                title: format!("note {}", i),
            })
            .collect();
        let rows = row_models(&notes);
        assert_eq!(rows.len(), 5);
        for (i, (index, title)) in rows.iter().enumerate() {
            assert_eq!(*index, i + 1);
            assert_eq!(*title, notes[i].title);
        }
    }
}

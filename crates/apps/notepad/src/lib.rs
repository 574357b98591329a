//! Multi-tab notepad desktop app.

mod tabs;

pub use tabs::{Tab, TabStrip};

use leptos::*;
use serde_json::Value;

fn tab_dom_id(id: u32) -> String {
    format!("notepad-tab-{id}")
}

#[component]
/// Notepad app window contents: a tab strip over a plain-text editor.
///
/// Edits only ever touch the active tab; the strip always keeps at least
/// one tab open.
pub fn NotepadApp(
    /// App launch parameters (optional `title` for the first tab).
    launch_params: Value,
) -> impl IntoView {
    let first_title = launch_params
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("Untitled")
        .to_string();

    let strip = create_rw_signal(TabStrip::new(&first_title));
    let active_content = Signal::derive(move || strip.with(|s| s.active_tab().content.clone()));
    let line_count = Signal::derive(move || active_content.get().lines().count());
    let char_count = Signal::derive(move || active_content.get().chars().count());

    view! {
        <div class="app-notepad">
            <div
                class="notepad-tabstrip"
                role="tablist"
                aria-label="Open tabs"
                aria-orientation="horizontal"
            >
                <For
                    each=move || strip.get().tabs().to_vec()
                    key=|tab| tab.id
                    let:tab
                >
                    {{
                        let tab_id = tab.id;
                        view! {
                            <span class="notepad-tab" role="presentation">
                                <button
                                    type="button"
                                    id=tab_dom_id(tab_id)
                                    class="notepad-tab-select"
                                    role="tab"
                                    aria-selected=move || strip.with(|s| s.active_id() == tab_id)
                                    aria-controls="notepad-tabpanel"
                                    on:click=move |_| {
                                        strip.update(|s| {
                                            s.set_active(tab_id);
                                        });
                                    }
                                >
                                    {tab.title.clone()}
                                </button>
                                <Show
                                    when=move || strip.with(|s| s.len() > 1)
                                    fallback=|| ()
                                >
                                    <button
                                        type="button"
                                        class="notepad-tab-close"
                                        aria-label="Close tab"
                                        on:click=move |_| {
                                            strip.update(|s| {
                                                s.close_tab(tab_id);
                                            });
                                        }
                                    >
                                        "\u{00d7}"
                                    </button>
                                </Show>
                            </span>
                        }
                    }}
                </For>
                <button
                    type="button"
                    class="notepad-tab-add"
                    aria-label="New tab"
                    on:click=move |_| {
                        strip.update(|s| {
                            s.add_tab();
                        });
                    }
                >
                    "+"
                </button>
            </div>

            <div
                id="notepad-tabpanel"
                class="notepad-editor"
                role="tabpanel"
                aria-labelledby=move || strip.with(|s| tab_dom_id(s.active_id()))
            >
                <textarea
                    class="notepad-page"
                    spellcheck="false"
                    autocomplete="off"
                    aria-label="Notepad document editor"
                    prop:value=move || active_content.get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        strip.update(|s| s.set_active_content(text));
                    }
                />
            </div>

            <div class="notepad-statusbar">
                <span>{move || format!("Lines: {}", line_count.get())}</span>
                <span>{move || format!("Chars: {}", char_count.get())}</span>
                <span>{move || strip.with(|s| format!("{} tab(s)", s.len()))}</span>
            </div>
        </div>
    }
}

use super::book_view::BookView;
use crate::model::{BookState, Page, ViewPrefs};
use yew::prelude::*;

const PREFS_KEY: &str = "fb_view_prefs";

#[function_component(App)]
pub fn app() -> Html {
    let book = use_reducer(|| BookState::new(Page::sample_book()));
    let prefs = use_state(ViewPrefs::default);

    // Load persisted view prefs
    {
        let prefs = prefs.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(PREFS_KEY) {
                        if let Ok(p) = serde_json::from_str(&raw) {
                            prefs.set(p);
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist pref changes
    {
        let current = *prefs;
        use_effect_with(current, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&current) {
                        let _ = store.set_item(PREFS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let dismiss_hint = {
        let prefs = prefs.clone();
        Callback::from(move |_| {
            prefs.set(ViewPrefs {
                hint_dismissed: true,
            })
        })
    };

    html! {
        <BookView
            book={book}
            show_hint={!prefs.hint_dismissed}
            dismiss_hint={dismiss_hint}
        />
    }
}

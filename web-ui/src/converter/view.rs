//! Converter view
//!
//! The component owns the signals and delegates every state change to the
//! transitions in `logic`, so the single-flight gate lives in one place.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::convert_text;
use crate::converter::logic::{
    begin_submission, clear_all, error_message, is_busy, output_text, settle_failure,
    settle_success, status_text,
};
use crate::converter::styles::CONVERTER_STYLES;
use crate::converter::types::{ConverterState, SubmitDecision};

const THEME_STORAGE_KEY: &str = "genzify-theme";

#[component]
pub fn ConverterApp() -> Element {
    let mut state = use_signal(ConverterState::default);
    let mut input_text = use_signal(String::new);
    let mut slang_level = use_signal(|| 50i64);
    let mut copied = use_signal(|| false);
    let mut current_theme = use_signal(|| "dark".to_string());
    let mut theme_initialized = use_signal(|| false);

    // Apply the cached theme once on mount.
    use_effect(move || {
        if theme_initialized() {
            return;
        }
        theme_initialized.set(true);

        let theme = get_cached_theme_preference().unwrap_or_else(|| "dark".to_string());
        apply_theme_to_document(&theme);
        current_theme.set(theme);
    });

    let on_convert = move |_| {
        // Gate and transition under one borrow; a click while a request is
        // in flight resolves to Ignored and nothing is spawned.
        let decision = {
            let mut st = state.write();
            begin_submission(&mut st, &input_text(), slang_level())
        };

        if let SubmitDecision::Start(request) = decision {
            copied.set(false);
            spawn(async move {
                let settled = convert_text(&request).await;
                let mut st = state.write();
                match settled {
                    Ok(converted) => settle_success(&mut st, converted),
                    Err(failure) => {
                        dioxus_logger::tracing::error!(
                            "Conversion failed: {}",
                            failure.message
                        );
                        settle_failure(&mut st, failure);
                    }
                }
            });
        }
    };

    let on_clear = move |_| {
        let cleared = {
            let mut st = state.write();
            clear_all(&mut st)
        };
        if cleared {
            input_text.set(String::new());
            copied.set(false);
        }
    };

    let on_copy = move |_| {
        let Some(text) = output_text(&state.read()).map(ToString::to_string) else {
            return;
        };
        copy_text_to_clipboard(&text);
        copied.set(true);
        spawn(async move {
            TimeoutFuture::new(2_000).await;
            copied.set(false);
        });
    };

    let toggle_theme = move |_| {
        let next_theme = if current_theme() == "dark" {
            "light".to_string()
        } else {
            "dark".to_string()
        };
        set_cached_theme_preference(&next_theme);
        apply_theme_to_document(&next_theme);
        current_theme.set(next_theme);
    };

    let snapshot = state();
    let busy = is_busy(&snapshot);
    let convert_disabled = busy || input_text().trim().is_empty();
    let status = status_text(&snapshot.phase);

    rsx! {
        style { {CONVERTER_STYLES} }
        div {
            class: "app-container",

            header {
                class: "app-header",
                span { class: "logo", "🤖" }
                h1 {
                    class: "main-title",
                    "GΣΠZ "
                    span { class: "title-accent", "CΦΠVΣЯTΣЯ" }
                }
                button {
                    class: "theme-switcher",
                    title: "Toggle theme",
                    onclick: toggle_theme,
                    if current_theme() == "dark" { "☀️" } else { "🌙" }
                }
            }

            main {
                class: "interface-card",

                div {
                    class: "card-header",
                    h2 { "Drop the Boomer Speak" }
                    span { class: "card-badge boomer-badge", "FORMAL" }
                }

                textarea {
                    class: "text-area input-area",
                    rows: "6",
                    placeholder: "e.g., I am exceptionally pleased with this advantageous outcome...",
                    value: "{input_text}",
                    disabled: busy,
                    oninput: move |e| input_text.set(e.value().clone()),
                }

                div {
                    class: "controls-area",
                    div {
                        class: "slang-level-control",
                        label { r#for: "slangLevel", "Vibe Intensity:" }
                        input {
                            r#type: "range",
                            id: "slangLevel",
                            class: "slang-slider",
                            min: "0",
                            max: "100",
                            value: "{slang_level}",
                            disabled: busy,
                            oninput: move |e| {
                                if let Ok(level) = e.value().parse::<i64>() {
                                    slang_level.set(level);
                                }
                            },
                        }
                        span { class: "slang-level-value", "{slang_level}%" }
                    }
                    div {
                        class: "action-buttons",
                        button {
                            class: "action-button convert-button",
                            disabled: convert_disabled,
                            onclick: on_convert,
                            if busy {
                                span { class: "loader" }
                            } else {
                                "Make it Vibe ✨"
                            }
                        }
                        if !input_text().is_empty() {
                            button {
                                class: "action-button clear-button",
                                disabled: busy,
                                onclick: on_clear,
                                "Yeet Text"
                            }
                        }
                    }
                }

                if let Some(message) = error_message(&snapshot) {
                    div {
                        class: "error-banner",
                        span { class: "error-icon", "⚠️" }
                        " {message}"
                    }
                }

                if let Some(output) = output_text(&snapshot) {
                    div {
                        class: "output-display",
                        div {
                            class: "card-header",
                            h2 { "Ayo, Peep This Drip:" }
                            span { class: "card-badge genz-badge", "GEN-Z" }
                        }
                        div { class: "text-area output-area", "{output}" }
                        button {
                            class: if copied() {
                                "action-button copy-button copied"
                            } else {
                                "action-button copy-button"
                            },
                            onclick: on_copy,
                            if copied() { "Copied! ✅ Period." } else { "Copy Dis 📋" }
                        }
                    }
                }
            }

            footer {
                class: "app-footer",
                span { class: "status-line", "{status}" }
                p { "Crafted with 💻 & questionable GenZ knowledge. No cap." }
            }
        }
    }
}

fn get_cached_theme_preference() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(THEME_STORAGE_KEY)
        .ok()?
}

fn set_cached_theme_preference(theme: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme);
    }
}

fn apply_theme_to_document(theme: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = document.body() {
        body.set_class_name(theme);
    }
}

fn copy_text_to_clipboard(text: &str) {
    let Ok(payload) = serde_json::to_string(text) else {
        return;
    };
    let js = format!(
        "if (navigator && navigator.clipboard) {{ navigator.clipboard.writeText({payload}); }}"
    );
    let _ = js_sys::eval(&js);
}

use leptos::prelude::*;

/// Stroke paths on a 24x24 grid for the icon identifiers we ship.
fn builtin_path(name: &str) -> Option<&'static str> {
    let (_, glyph) = name.split_once(':')?;
    match glyph {
        "copy" => Some(
            "M11 9h9a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-9a2 2 0 0 1-2-2v-9a2 2 0 0 1 2-2z\
             M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1",
        ),
        "check" => Some("M20 6 9 17l-5-5"),
        "link" => Some(
            "M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71\
             M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71",
        ),
        _ => None,
    }
}

/// Renders an icon by `collection:name` identifier. Identifiers without a
/// built-in glyph render `fallback` as text instead.
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: String,
    #[prop(default = 18)] size: u32,
    #[prop(optional, into)] fallback: Option<String>,
) -> impl IntoView {
    let size = size.to_string();
    match builtin_path(&name) {
        Some(d) => view! {
            <svg
                class=format!("icon {}", class)
                data-icon=name
                width=size.clone()
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d=d />
            </svg>
        }
        .into_any(),
        None => {
            let text = fallback.unwrap_or_else(|| name.clone());
            view! { <span class=format!("icon icon-fallback {}", class) data-icon=name>{text}</span> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs_across_collections() {
        assert!(builtin_path("ph:copy").is_some());
        assert_eq!(builtin_path("ph:copy"), builtin_path("lucide:copy"));
        assert_eq!(builtin_path("ph:check"), Some("M20 6 9 17l-5-5"));
        assert!(builtin_path("ph:link").is_some());
    }

    #[test]
    fn unknown_or_malformed() {
        assert!(builtin_path("uil:linkedin").is_none());
        assert!(builtin_path("copy").is_none());
    }
}

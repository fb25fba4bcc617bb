use dioxus::prelude::*;

/// Full-screen error shown instead of the board when startup fails
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-title", "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Configuration error".to_string(),
                message: "Could not start".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Configuration error"));
        assert!(html.contains("Could not start"));
        assert!(!html.contains("<pre"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Configuration error".to_string(),
                message: "Could not start".to_string(),
                details: Some("Unknown block kind: \"video\"".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<pre"));
        assert!(html.contains("Unknown block kind"));
    }
}

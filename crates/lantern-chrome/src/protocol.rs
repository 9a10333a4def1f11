//! Typed JSON protocol between the toolbar document and the shell.
//!
//! Messages flow in both directions:
//! - **JS -> Rust** ([`ChromeCommand`]): the toolbar calls
//!   `window.ipc.postMessage(JSON.stringify({...}))`, which triggers
//!   the `ipc_handler` registered on the toolbar webview.
//! - **Rust -> JS** ([`ChromeUpdate`]): the shell evaluates the
//!   dispatch snippet in the toolbar webview context.

use serde::{Deserialize, Serialize};

/// A user action posted by the toolbar document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum ChromeCommand {
    /// The address entry was submitted with `text`.
    Navigate { text: String },
    Back,
    Forward,
    Reload,
    /// The failure alert was closed.
    DismissAlert,
}

impl ChromeCommand {
    /// Parse a command from a raw IPC body. Returns `None` for
    /// anything that is not a well-formed command.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A state update pushed into the toolbar document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChromeUpdate {
    /// History button enablement.
    Controls {
        back_enabled: bool,
        forward_enabled: bool,
    },
    /// Progress bar visibility and value. `animate` selects whether
    /// the value change is transitioned or snapped.
    Progress {
        visible: bool,
        value: f64,
        animate: bool,
    },
    /// Text shown in the address entry.
    Address { url: String },
    /// Modal failure alert to display.
    Alert { message: String },
}

/// Bundled toolbar document, rendered by the chrome webview.
pub const TOOLBAR_HTML: &str = include_str!("toolbar.html");

/// JavaScript snippet that sets up the chrome bridge on the JS side.
/// Injected as an initialization script into the toolbar webview.
pub const CHROME_INIT_SCRIPT: &str = r#"
(function() {
    window.lantern = window.lantern || {};
    window.lantern.chrome = {
        send: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        // Callbacks registered by the document to handle updates
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(msg) {
            var handler = this._handlers[msg.kind];
            if (handler) {
                handler(msg);
            }
        }
    };
})();
"#;

/// Generate the JS snippet that delivers `update` to the toolbar.
pub fn js_dispatch_update(update: &ChromeUpdate) -> String {
    let json = serde_json::to_string(update).unwrap_or_else(|_| "null".to_string());
    format!("window.lantern.chrome._dispatch({json});")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Command parsing --

    #[test]
    fn navigate_command_parses() {
        let cmd = ChromeCommand::from_json(r#"{"cmd":"navigate","text":"example.com"}"#);
        assert_eq!(
            cmd,
            Some(ChromeCommand::Navigate {
                text: "example.com".into()
            })
        );
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(
            ChromeCommand::from_json(r#"{"cmd":"back"}"#),
            Some(ChromeCommand::Back)
        );
        assert_eq!(
            ChromeCommand::from_json(r#"{"cmd":"forward"}"#),
            Some(ChromeCommand::Forward)
        );
        assert_eq!(
            ChromeCommand::from_json(r#"{"cmd":"reload"}"#),
            Some(ChromeCommand::Reload)
        );
        assert_eq!(
            ChromeCommand::from_json(r#"{"cmd":"dismiss-alert"}"#),
            Some(ChromeCommand::DismissAlert)
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(ChromeCommand::from_json("not json"), None);
        assert_eq!(ChromeCommand::from_json("{}"), None);
        assert_eq!(ChromeCommand::from_json(r#"{"cmd":"explode"}"#), None);
        // navigate without its payload is malformed
        assert_eq!(ChromeCommand::from_json(r#"{"cmd":"navigate"}"#), None);
    }

    // -- Update serialization --

    #[test]
    fn controls_update_serializes_with_kind_tag() {
        let update = ChromeUpdate::Controls {
            back_enabled: true,
            forward_enabled: false,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains(r#""kind":"controls""#));
        assert!(json.contains(r#""back_enabled":true"#));
        assert!(json.contains(r#""forward_enabled":false"#));
    }

    #[test]
    fn updates_round_trip() {
        let updates = vec![
            ChromeUpdate::Progress {
                visible: true,
                value: 0.4,
                animate: true,
            },
            ChromeUpdate::Address {
                url: "https://example.com/".into(),
            },
            ChromeUpdate::Alert {
                message: "host unreachable".into(),
            },
        ];
        for update in updates {
            let json = serde_json::to_string(&update).unwrap();
            let parsed: ChromeUpdate = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, update);
        }
    }

    // -- Dispatch snippet --

    #[test]
    fn dispatch_snippet_wraps_the_update() {
        let script = js_dispatch_update(&ChromeUpdate::Alert {
            message: "boom".into(),
        });
        assert!(script.starts_with("window.lantern.chrome._dispatch({"));
        assert!(script.ends_with("});"));
        assert!(script.contains(r#""kind":"alert""#));
    }

    #[test]
    fn dispatch_snippet_escapes_quotes() {
        let script = js_dispatch_update(&ChromeUpdate::Alert {
            message: r#"server said "no""#.into(),
        });
        assert!(script.contains(r#"\"no\""#));
    }

    // -- Bundled assets --

    #[test]
    fn toolbar_document_wires_every_control() {
        for id in ["back", "forward", "reload", "address", "progress", "alert"] {
            assert!(
                TOOLBAR_HTML.contains(&format!("id=\"{id}\"")),
                "toolbar.html is missing #{id}"
            );
        }
    }

    #[test]
    fn init_script_defines_the_bridge() {
        assert!(CHROME_INIT_SCRIPT.contains("window.lantern"));
        assert!(CHROME_INIT_SCRIPT.contains("_dispatch"));
        assert!(CHROME_INIT_SCRIPT.contains("postMessage"));
    }
}

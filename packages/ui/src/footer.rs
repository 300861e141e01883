//! Bottom navigation on mobile, a floating "+" on desktop. Both open the
//! create dialog.

use dioxus::prelude::*;

use crate::create_dialog::CreateDialog;
use crate::icons::{FaBookOpen, FaHouse, FaMagnifyingGlass, FaPlus};
use crate::viewport::use_is_desktop;
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    let desktop = use_is_desktop();
    let mut creating = use_signal(|| false);

    rsx! {
        if desktop {
            button {
                class: "fab",
                aria_label: "Create",
                onclick: move |_| creating.set(true),
                Icon { icon: FaPlus, width: 22, height: 22 }
            }
        } else {
            nav { class: "bottom-bar",
                Link { to: "/", Icon { icon: FaHouse, width: 22, height: 22 } }
                Link { to: "/activities", Icon { icon: FaBookOpen, width: 22, height: 22 } }
                button {
                    class: "bottom-bar-create",
                    aria_label: "Create",
                    onclick: move |_| creating.set(true),
                    Icon { icon: FaPlus, width: 18, height: 18 }
                }
                Link { to: "/", Icon { icon: FaMagnifyingGlass, width: 22, height: 22 } }
            }
        }
        if creating() {
            CreateDialog { on_close: move |_| creating.set(false) }
        }
    }
}

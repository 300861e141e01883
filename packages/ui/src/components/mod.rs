//! Styled building blocks shared by every page.

mod accordion;
pub use accordion::{Accordion, AccordionItem};

mod avatar;
pub use avatar::Avatar;

mod badge;
pub use badge::{category_tone, Badge, BadgeTone};

mod button;
pub use button::{Button, ButtonVariant};

mod dialog;
pub use dialog::{Dialog, ModalOverlay};

mod input;
pub use input::{Input, PasswordInput, Select, Textarea};

mod label;
pub use label::Label;

mod sheet;
pub use sheet::Sheet;

mod tabs;
pub use tabs::Tabs;

pub use crate::toast::{use_toast, ToastOptions, ToastProvider, Toasts};

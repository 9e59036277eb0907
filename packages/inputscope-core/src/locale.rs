//! User-facing text.
//!
//! Log details and labels are picked from here so a panel can be switched between English
//! and Brazilian Portuguese without touching capture logic.

use crate::{Point, PointerButton, WheelDirection};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

/// A log detail, with whatever it needs to be formatted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<'a> {
    Dragging(Point),
    PointerEntered,
    PointerLeft,
    ButtonPressed(PointerButton, Point),
    ButtonReleased(PointerButton, Point),
    Click(Point),
    DoubleClick(Point),
    ContextMenu(Point),
    KeyboardActivation,
    Wheel(WheelDirection, f64),
    MouseLogCleared,
    KeyPressed {
        key: &'a str,
        code: &'a str,
        modifiers: &'a str,
    },
    KeyReleased {
        key: &'a str,
        code: &'a str,
    },
    CharacterTyped {
        key: &'a str,
    },
    FieldFocused,
    FieldBlurred,
    ValueChanged(&'a str),
    EscapePressed,
    HelpPressed,
    SavePressed,
    KeyboardLogCleared,
}

/// Static interface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Title,
    ToggleTheme,
    DarkModeOn,
    LightModeOn,
    MousePanel,
    MouseHint,
    Dragging,
    Idle,
    EventsCaptured,
    MouseLogEmpty,
    KeyboardPanel,
    FieldPlaceholder,
    ShortcutHint,
    KeyboardLogEmpty,
    ClearLog,
    CopyLog,
}

impl Locale {
    /// Resolves a BCP 47 tag such as `pt-BR` by its primary subtag. Unknown languages get
    /// English.
    pub fn from_language_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("pt") {
            Locale::Portuguese
        } else {
            Locale::English
        }
    }

    pub fn button_name(self, button: PointerButton) -> &'static str {
        use PointerButton::*;
        match (self, button) {
            (Locale::English, Left) => "Left",
            (Locale::English, Middle) => "Middle",
            (Locale::English, Right) => "Right",
            (Locale::English, Unknown) => "Unknown",
            (Locale::Portuguese, Left) => "Esquerdo",
            (Locale::Portuguese, Middle) => "Meio",
            (Locale::Portuguese, Right) => "Direito",
            (Locale::Portuguese, Unknown) => "Desconhecido",
        }
    }

    pub fn direction_name(self, direction: WheelDirection) -> &'static str {
        match (self, direction) {
            (Locale::English, WheelDirection::Down) => "down",
            (Locale::English, WheelDirection::Up) => "up",
            (Locale::Portuguese, WheelDirection::Down) => "baixo",
            (Locale::Portuguese, WheelDirection::Up) => "cima",
        }
    }

    pub fn message(self, message: Message<'_>) -> String {
        match self {
            Locale::English => self.english(message),
            Locale::Portuguese => self.portuguese(message),
        }
    }

    fn english(self, message: Message<'_>) -> String {
        match message {
            Message::Dragging(p) => format!("- Dragging at {p}"),
            Message::PointerEntered => "- Pointer entered the area".to_string(),
            Message::PointerLeft => "- Pointer left the area".to_string(),
            Message::ButtonPressed(b, p) => {
                format!("- {} button pressed at {p}", self.button_name(b))
            }
            Message::ButtonReleased(b, p) => {
                format!("- {} button released at {p}", self.button_name(b))
            }
            Message::Click(p) => format!("- Click at {p}"),
            Message::DoubleClick(p) => format!("- Double click at {p}"),
            Message::ContextMenu(p) => format!("- Context menu at {p}"),
            Message::KeyboardActivation => "- Activated from the keyboard".to_string(),
            Message::Wheel(d, delta) => {
                format!("- Scrolled {} ({delta})", self.direction_name(d))
            }
            Message::MouseLogCleared => "- Mouse log cleared".to_string(),
            Message::KeyPressed {
                key,
                code,
                modifiers,
            } => format!("- Key \"{key}\" pressed (code: {code}){modifiers}"),
            Message::KeyReleased { key, code } => {
                format!("- Key \"{key}\" released (code: {code})")
            }
            Message::CharacterTyped { key } => {
                format!("- Character \"{key}\" typed (code: {key})")
            }
            Message::FieldFocused => "- Text field focused".to_string(),
            Message::FieldBlurred => "- Text field lost focus".to_string(),
            Message::ValueChanged(value) => format!("- Content changed: \"{value}\""),
            Message::EscapePressed => "- Escape key pressed".to_string(),
            Message::HelpPressed => "- F1 key pressed".to_string(),
            Message::SavePressed => "- Ctrl+S shortcut pressed".to_string(),
            Message::KeyboardLogCleared => "- Keyboard log cleared".to_string(),
        }
    }

    fn portuguese(self, message: Message<'_>) -> String {
        match message {
            Message::Dragging(p) => format!("- Arrastando em {p}"),
            Message::PointerEntered => "- Mouse entrou na área".to_string(),
            Message::PointerLeft => "- Mouse saiu da área".to_string(),
            Message::ButtonPressed(b, p) => {
                format!("- Botão {} pressionado em {p}", self.button_name(b))
            }
            Message::ButtonReleased(b, p) => {
                format!("- Botão {} solto em {p}", self.button_name(b))
            }
            Message::Click(p) => format!("- Clique em {p}"),
            Message::DoubleClick(p) => format!("- Duplo clique em {p}"),
            Message::ContextMenu(p) => format!("- Menu de contexto em {p}"),
            Message::KeyboardActivation => "- Ativado pelo teclado".to_string(),
            Message::Wheel(d, delta) => {
                format!("- Scroll para {} ({delta})", self.direction_name(d))
            }
            Message::MouseLogCleared => "- Log do mouse limpo".to_string(),
            Message::KeyPressed {
                key,
                code,
                modifiers,
            } => format!("- Tecla \"{key}\" pressionada (código: {code}){modifiers}"),
            Message::KeyReleased { key, code } => {
                format!("- Tecla \"{key}\" solta (código: {code})")
            }
            Message::CharacterTyped { key } => {
                format!("- Caractere \"{key}\" digitado (código: {key})")
            }
            Message::FieldFocused => "- Campo de texto focado".to_string(),
            Message::FieldBlurred => "- Campo de texto perdeu foco".to_string(),
            Message::ValueChanged(value) => format!("- Conteúdo alterado: \"{value}\""),
            Message::EscapePressed => "- Tecla Escape pressionada".to_string(),
            Message::HelpPressed => "- Tecla F1 pressionada".to_string(),
            Message::SavePressed => "- Atalho Ctrl+S pressionado".to_string(),
            Message::KeyboardLogCleared => "- Log do teclado limpo".to_string(),
        }
    }

    pub fn label(self, label: Label) -> &'static str {
        match self {
            Locale::English => match label {
                Label::Title => "Mouse and Keyboard Event Demo",
                Label::ToggleTheme => "Toggle dark mode",
                Label::DarkModeOn => "Dark mode on",
                Label::LightModeOn => "Light mode on",
                Label::MousePanel => "Mouse Events",
                Label::MouseHint => "Move the mouse here, click and drag!",
                Label::Dragging => "Dragging...",
                Label::Idle => "Waiting for interaction",
                Label::EventsCaptured => "Events Captured",
                Label::MouseLogEmpty => "No events captured yet. Start using the mouse!",
                Label::KeyboardPanel => "Keyboard Events",
                Label::FieldPlaceholder => "Type something here to test keyboard events...",
                Label::ShortcutHint => "Also try: ESC, F1, Ctrl+S (works anywhere on the page)",
                Label::KeyboardLogEmpty => "No events captured yet. Start typing!",
                Label::ClearLog => "Clear Log",
                Label::CopyLog => "Copy Log",
            },
            Locale::Portuguese => match label {
                Label::Title => "Demonstração de Eventos Mouse e Teclado",
                Label::ToggleTheme => "Alternar modo escuro",
                Label::DarkModeOn => "Modo Escuro Ativado",
                Label::LightModeOn => "Modo Claro Ativado",
                Label::MousePanel => "Eventos do Mouse",
                Label::MouseHint => "Mova o mouse aqui, clique e arraste!",
                Label::Dragging => "Arrastando...",
                Label::Idle => "Aguardando interação",
                Label::EventsCaptured => "Eventos Capturados",
                Label::MouseLogEmpty => {
                    "Nenhum evento capturado ainda. Comece a interagir com o mouse!"
                }
                Label::KeyboardPanel => "Eventos do Teclado",
                Label::FieldPlaceholder => "Digite algo aqui para testar eventos do teclado...",
                Label::ShortcutHint => "Experimente também: ESC, F1, Ctrl+S (funciona globalmente)",
                Label::KeyboardLogEmpty => "Nenhum evento capturado ainda. Comece a digitar!",
                Label::ClearLog => "Limpar Log",
                Label::CopyLog => "Copiar Log",
            },
        }
    }
}

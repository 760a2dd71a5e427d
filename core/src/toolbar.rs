//! Editor toolbar model.
//!
//! Button variants only drive styling in the rendering layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Search,
    Copy,
    Download,
    Clear,
}

impl ToolbarAction {
    /// Toolbar buttons, left to right.
    pub const ALL: [ToolbarAction; 4] = [
        ToolbarAction::Search,
        ToolbarAction::Copy,
        ToolbarAction::Download,
        ToolbarAction::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarAction::Search => "Google Search",
            ToolbarAction::Copy => "Copy",
            ToolbarAction::Download => "Save .txt",
            ToolbarAction::Clear => "Clear",
        }
    }

    pub fn variant(&self) -> ButtonVariant {
        match self {
            ToolbarAction::Search => ButtonVariant::Blue,
            ToolbarAction::Copy => ButtonVariant::Primary,
            ToolbarAction::Download => ButtonVariant::Secondary,
            ToolbarAction::Clear => ButtonVariant::Danger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_order_and_variants() {
        let variants: Vec<ButtonVariant> = ToolbarAction::ALL.iter().map(|a| a.variant()).collect();
        assert_eq!(
            variants,
            vec![
                ButtonVariant::Blue,
                ButtonVariant::Primary,
                ButtonVariant::Secondary,
                ButtonVariant::Danger
            ]
        );
        assert_eq!(ToolbarAction::Download.label(), "Save .txt");
    }
}

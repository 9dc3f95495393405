use crate::app::Model;

/// All possible events and actions in the application.
///
/// These represent user input and system events; every navigator
/// transition is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Cursor
    /// Move the selection down one row
    MoveDown,
    /// Move the selection up one row
    MoveUp,
    /// Move the selection down one page
    PageDown,
    /// Move the selection up one page
    PageUp,
    /// Jump to the first row
    JumpTop,
    /// Jump to the last row
    JumpBottom,

    // Tree navigation
    /// Descend into the selected directory
    EnterDir,
    /// Go back to the parent directory
    GoToParent,
    /// Make the selected directory the virtual root ("go in")
    SetVirtualRoot,
    /// Restore the true root as the virtual root ("go out")
    ResetVirtualRoot,
    /// Advance the sort mode through the fixed 4-mode cycle
    CycleSort,

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA: all state transitions happen here, with no
/// side effects, so every transition is testable without a terminal.
/// Preconditions that do not hold (empty directory, already at the root)
/// leave the model unchanged rather than failing.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Cursor
        Message::MoveDown => model.viewport.select_down(),
        Message::MoveUp => model.viewport.select_up(),
        Message::PageDown => model.viewport.page_down(),
        Message::PageUp => model.viewport.page_up(),
        Message::JumpTop => model.viewport.jump_top(),
        Message::JumpBottom => model.viewport.jump_bottom(),

        // Tree navigation
        Message::EnterDir => {
            if let Some(selected) = model.selected_node()
                && model.tree.has_children(selected)
            {
                model
                    .cursor_memory
                    .insert(model.current_dir, model.viewport.selected());
                model.current_dir = selected;
                model.rebuild_display();
                let remembered = model.cursor_memory.get(&selected).copied().unwrap_or(0);
                model.viewport.select(remembered);
            }
        }
        Message::GoToParent => {
            if model.current_dir != model.virtual_root
                && let Some(parent) = model.tree.node(model.current_dir).parent()
            {
                model
                    .cursor_memory
                    .insert(model.current_dir, model.viewport.selected());
                model.current_dir = parent;
                model.rebuild_display();
                // The parent's remembered index points back at the directory
                // we just left, saved when it was entered.
                let remembered = model.cursor_memory.get(&parent).copied().unwrap_or(0);
                model.viewport.select(remembered);
            }
        }
        Message::SetVirtualRoot => {
            if let Some(selected) = model.selected_node()
                && model.tree.has_children(selected)
            {
                model
                    .cursor_memory
                    .insert(model.current_dir, model.viewport.selected());
                model.virtual_root = selected;
                model.current_dir = selected;
                model.rebuild_display();
                model.viewport.select(0);
            }
        }
        Message::ResetVirtualRoot => {
            // current_dir stays put: the true root is an ancestor of
            // everything, so it remains reachable.
            model.virtual_root = model.tree.root();
        }
        Message::CycleSort => {
            let followed = model.selected_node();
            model.sort_mode = model.sort_mode.next();
            model.rebuild_display();
            let position = followed
                .and_then(|id| model.display.iter().position(|&n| n == id))
                .unwrap_or(0);
            model.viewport.select(position);
        }

        // Overlays
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,

        // Window
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(width, height.saturating_sub(crate::ui::CHROME_ROWS));
        }

        // Application
        Message::Quit => model.should_quit = true,
    }
    model
}

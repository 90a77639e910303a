pub mod catalog;
pub mod categories;
pub mod product_detail;
pub mod products;

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native yes/no prompt shown before a delete.
pub(crate) fn confirm_delete(title: &str, name: &str) -> bool {
    let confirm = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(format!("¿Seguro que deseas eliminar \"{name}\"?"))
        .set_buttons(MessageButtons::YesNo)
        .show();
    confirm == MessageDialogResult::Yes
}

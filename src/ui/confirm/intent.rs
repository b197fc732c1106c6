use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Open the dialog for a record.
    Request { user_id: String },
    /// Close without deleting; the pending id is discarded.
    Cancel,
    /// Close after the delete request was dispatched by the input layer.
    Confirm,
}

impl Intent for ConfirmIntent {}

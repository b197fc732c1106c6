use crate::model::User;
use crate::ui::confirm::{ConfirmDeleteState, ConfirmIntent, ConfirmReducer};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use crate::ui::pager;
use crate::ui::users::{UsersIntent, UsersReducer, UsersState};

/// Which region receives key input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Form,
}

/// Generic MVI dispatch: takes current state, runs the reducer, stores
/// the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level UI state: the users cache plus the view state machine of
/// page, form mode, and delete confirmation.
pub struct App {
    should_quit: bool,
    focus: Focus,
    users: UsersState,
    form: FormState,
    confirm: ConfirmDeleteState,
    /// 0-based page into the cached list.
    page: usize,
    /// Selected row within the visible page.
    selected: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            users: UsersState::default(),
            form: FormState::default(),
            confirm: ConfirmDeleteState::default(),
            page: 0,
            selected: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmDeleteState {
        &self.confirm
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        pager::page_count(self.users.list.len())
    }

    /// The rows on the current page.
    pub fn visible_users(&self) -> &[User] {
        pager::page_slice(&self.users.list, self.page)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.visible_users().get(self.selected)
    }

    pub fn apply_users(&mut self, intent: UsersIntent) {
        dispatch_mvi!(self, users, UsersReducer, intent);
        // A mutation may have shrunk the list under the cursor.
        self.page = pager::clamp_page(self.page, self.users.list.len());
        self.clamp_selection();
    }

    pub fn apply_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn apply_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_users().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn change_page(&mut self, delta: isize) {
        let pages = self.page_count();
        if pages == 0 {
            return;
        }
        let next = (self.page as isize + delta).clamp(0, pages as isize - 1);
        self.page = next as usize;
        self.clamp_selection();
    }

    /// Jump to a 0-based page; out-of-range targets are ignored, matching
    /// the page buttons only existing for rendered pages.
    pub fn jump_to_page(&mut self, page: usize) {
        if page < self.page_count() {
            self.page = page;
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_users().len();
        self.selected = if len == 0 {
            0
        } else {
            self.selected.min(len - 1)
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

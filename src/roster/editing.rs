/// Which record, if any, the form currently reflects for update and delete.
///
/// Having no selection is what tells an Add apart from an Update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingContext {
    pub selected_id: Option<String>,
}

impl EditingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, student_id: impl Into<String>) {
        self.selected_id = Some(student_id.into());
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }
}
